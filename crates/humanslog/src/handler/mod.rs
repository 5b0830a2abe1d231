//! Handler: threshold filter in front of the renderer
//!
//! # Data Flow
//! ```text
//! tracing macro
//!     → Layer::on_event (layer.rs)
//!     → capture: fields → LogEvent, stamped by the Clock
//!     → handle: drop below min_severity
//!     → Renderer::render into one writer from the MakeWriter
//! ```
//!
//! The handler does not serialize concurrent events. One writer is requested
//! per event, so a destination such as `Mutex<W>` keeps each event
//! contiguous; a bare `io::stdout` may interleave lines from different
//! threads.

mod layer;
mod options;

pub use options::HandlerOption;

use crate::{
    clock::{
        Clock,
        SystemClock,
    },
    error::RenderError,
    event::LogEvent,
    field_visitor::EventVisitor,
    renderer::Renderer,
    severity::Severity,
};
use std::{
    fmt,
    io,
    sync::Arc,
};
use tracing::Event;
use tracing_subscriber::fmt::{
    MakeWriter,
    writer::BoxMakeWriter,
};

/// Renders enabled events to a bound destination
pub struct Handler {
    make_writer: BoxMakeWriter,
    min_severity: Severity,
    renderer: Renderer,
    clock: Arc<dyn Clock>,
}

impl Handler {
    /// Build a handler from options applied in order.
    ///
    /// Defaults: stdout, minimum severity `Info`, ANSI colors, local time.
    /// A later option overrides an earlier one for the same setting.
    pub fn new(options: impl IntoIterator<Item = HandlerOption>) -> Self {
        options
            .into_iter()
            .fold(Self::defaults(), |handler, option| handler.apply(option))
    }

    fn defaults() -> Self {
        Self {
            make_writer: BoxMakeWriter::new(io::stdout),
            min_severity: Severity::Info,
            renderer: Renderer::ansi(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Whether events of `severity` pass the threshold
    pub fn enabled(
        &self,
        severity: Severity,
    ) -> bool {
        severity >= self.min_severity
    }

    /// Render `event` if it passes the threshold.
    ///
    /// Returns the number of bytes written, `0` for a dropped event. Write
    /// failures are returned as-is; nothing is retried.
    pub fn handle(
        &self,
        event: &LogEvent,
    ) -> Result<usize, RenderError> {
        if !self.enabled(event.severity) {
            return Ok(0);
        }
        let mut target = self.make_writer.make_writer();
        self.renderer.render(event, &mut target)
    }

    /// Convert a `tracing` event into a [`LogEvent`] stamped with this
    /// handler's clock
    pub fn capture(
        &self,
        event: &Event<'_>,
    ) -> LogEvent {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        LogEvent {
            timestamp: self.clock.now(),
            severity: Severity::from(event.metadata().level()),
            message: visitor.message,
            attributes: visitor.attributes,
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::defaults()
    }
}

impl fmt::Debug for Handler {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Handler")
            .field("min_severity", &self.min_severity)
            .field("renderer", &self.renderer)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
