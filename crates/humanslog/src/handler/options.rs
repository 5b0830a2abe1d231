//! Construction options and builder methods

use super::Handler;
use crate::{
    clock::Clock,
    renderer::Renderer,
    severity::Severity,
};
use std::sync::Arc;
use tracing_subscriber::fmt::{
    MakeWriter,
    writer::BoxMakeWriter,
};

/// A single setting passed to [`Handler::new`]
pub enum HandlerOption {
    /// Where rendered events are written (default: stdout)
    Destination(BoxMakeWriter),
    /// Events below this severity are dropped (default: `Info`)
    MinSeverity(Severity),
    /// Colored severity and bold message (default: `true`)
    Ansi(bool),
    /// Source of event timestamps (default: local system time)
    Clock(Arc<dyn Clock>),
}

impl HandlerOption {
    pub fn destination<M>(make_writer: M) -> Self
    where
        M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        HandlerOption::Destination(BoxMakeWriter::new(make_writer))
    }

    pub fn clock(clock: impl Clock) -> Self {
        HandlerOption::Clock(Arc::new(clock))
    }
}

impl Handler {
    pub(super) fn apply(
        mut self,
        option: HandlerOption,
    ) -> Self {
        match option {
            HandlerOption::Destination(make_writer) =>
                self.make_writer = make_writer,
            HandlerOption::MinSeverity(severity) =>
                self.min_severity = severity,
            HandlerOption::Ansi(enabled) =>
                self.renderer = if enabled {
                    Renderer::ansi()
                } else {
                    Renderer::plain()
                },
            HandlerOption::Clock(clock) => self.clock = clock,
        }
        self
    }

    /// Set the destination
    pub fn with_writer<M>(
        self,
        make_writer: M,
    ) -> Self
    where
        M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.apply(HandlerOption::destination(make_writer))
    }

    /// Set the minimum severity that is rendered
    pub fn with_min_severity(
        self,
        severity: Severity,
    ) -> Self {
        self.apply(HandlerOption::MinSeverity(severity))
    }

    /// Enable/disable ANSI styling
    pub fn with_ansi(
        self,
        enabled: bool,
    ) -> Self {
        self.apply(HandlerOption::Ansi(enabled))
    }

    /// Replace the clock used to stamp captured events
    pub fn with_clock(
        self,
        clock: impl Clock,
    ) -> Self {
        self.apply(HandlerOption::clock(clock))
    }

    /// Use a fully custom renderer
    pub fn with_renderer(
        mut self,
        renderer: Renderer,
    ) -> Self {
        self.renderer = renderer;
        self
    }
}
