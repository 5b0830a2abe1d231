//! Shared helpers for unit tests

use chrono::{
    DateTime,
    FixedOffset,
    TimeZone,
    Utc,
};
use std::{
    io::{
        self,
        Write,
    },
    sync::{
        Arc,
        Mutex,
    },
};

/// 2024-01-02 at `hour:minute` UTC
pub(crate) fn at(
    hour: u32,
    minute: u32,
) -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 1, 2, hour, minute, 0)
        .single()
        .expect("valid test time")
        .fixed_offset()
}

/// Accepts up to `budget` bytes, then fails every write with `BrokenPipe`
#[derive(Debug, Default)]
pub(crate) struct FailingWriter {
    pub(crate) budget: usize,
    pub(crate) accepted: Vec<u8>,
    pub(crate) attempts: usize,
}

impl FailingWriter {
    pub(crate) fn after_bytes(budget: usize) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }
}

impl Write for FailingWriter {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.attempts += 1;
        let remaining = self.budget - self.accepted.len();
        if remaining == 0 {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "destination closed",
            ));
        }
        let n = remaining.min(buf.len());
        self.accepted.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory destination that can be handed to a handler and read back.
///
/// `MakeWriter` is implemented for `Arc<W>` when `&W: Write`, so the buffer
/// is shared as `Arc<SharedBuffer>`; each write takes the lock.
#[derive(Debug, Default)]
pub(crate) struct SharedBuffer(Mutex<Vec<u8>>);

impl Write for &SharedBuffer {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("buffer lock poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub(crate) fn shared_buffer() -> Arc<SharedBuffer> {
    Arc::new(SharedBuffer::default())
}

pub(crate) fn contents(buffer: &SharedBuffer) -> String {
    let bytes = buffer.0.lock().expect("buffer lock");
    String::from_utf8_lossy(&bytes).into_owned()
}
