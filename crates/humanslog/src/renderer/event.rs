//! Rendering of a single event

use super::{
    core::{
        KITCHEN,
        Renderer,
    },
    table::AttributeTable,
};
use crate::{
    error::RenderError,
    event::LogEvent,
    writers::CountingWriter,
};
use std::io::{
    self,
    Write,
};

impl Renderer {
    /// Write `event` to `target` and return the number of bytes written.
    ///
    /// The header line is written first. The attribute table follows only if
    /// the event has attributes and the header was written completely; the
    /// first failed write aborts the call.
    pub fn render<W: Write + ?Sized>(
        &self,
        event: &LogEvent,
        target: &mut W,
    ) -> Result<usize, RenderError> {
        let mut out = CountingWriter::new(target);

        self.write_header(&mut out, event)?;

        if !event.attributes.is_empty() {
            AttributeTable::from_attributes(&event.attributes)
                .write_to(&mut out)?;
        }

        Ok(out.written())
    }

    /// Render into a `String`, mostly useful for tests and previews
    pub fn render_to_string(
        &self,
        event: &LogEvent,
    ) -> String {
        let mut buf = Vec::new();
        self.render(event, &mut buf)
            .expect("Vec writes are infallible");
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn write_header<W: Write + ?Sized>(
        &self,
        out: &mut W,
        event: &LogEvent,
    ) -> io::Result<()> {
        let level_style = self.palette.style_for(event.severity);
        writeln!(
            out,
            "[{}][{}] {}",
            level_style.paint(event.severity),
            event.timestamp.format(KITCHEN),
            self.emphasis.paint(&event.message),
        )
    }
}
