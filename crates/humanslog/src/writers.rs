//! Writer adapters used while rendering

use std::io::{
    self,
    Write,
};

/// Forwards to an inner writer and counts the bytes it accepted
pub(crate) struct CountingWriter<'a, W: ?Sized> {
    inner: &'a mut W,
    written: usize,
}

impl<'a, W: Write + ?Sized> CountingWriter<'a, W> {
    pub(crate) fn new(inner: &'a mut W) -> Self {
        Self { inner, written: 0 }
    }

    pub(crate) fn written(&self) -> usize {
        self.written
    }
}

impl<W: Write + ?Sized> Write for CountingWriter<'_, W> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
