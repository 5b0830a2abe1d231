//! Helpers shared by the integration tests

#![allow(dead_code)]

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

pub fn at(
    hour: u32,
    minute: u32,
) -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 1, 2, hour, minute, 0)
        .single()
        .expect("valid test time")
        .fixed_offset()
}

/// In-memory handler destination, shared as `Arc<SharedBuffer>`
#[derive(Debug, Default)]
pub struct SharedBuffer(Mutex<Vec<u8>>);

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

pub fn shared_buffer() -> Arc<SharedBuffer> {
    Arc::new(SharedBuffer::default())
}

pub fn contents(buffer: &SharedBuffer) -> String {
    let bytes = buffer.0.lock().expect("buffer lock");
    String::from_utf8_lossy(&bytes).into_owned()
}
