//! Human-readable rendering of `tracing` events.
//!
//! Each event is written as a header line with a colored severity label, the
//! wall-clock time and the message in bold, followed by a table of the
//! event's fields:
//! ```text
//! [INFO][3:04PM] started
//! +------+------+
//! | port | 8080 |
//! +------+------+
//! ```
//!
//! ```no_run
//! humanslog::init().expect("no other global subscriber");
//! tracing::info!(port = 8080, "started");
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod global;
pub mod handler;
pub mod palette;
pub mod renderer;
pub mod severity;

mod field_visitor;
mod string_utils;
mod writers;

#[cfg(test)]
mod tests;

pub use crate::{
    clock::{
        Clock,
        FixedClock,
        SystemClock,
    },
    config::{
        HumanLogConfig,
        Output,
    },
    error::{
        ConfigError,
        InstallError,
        RenderError,
    },
    event::{
        Attribute,
        LogEvent,
        Value,
    },
    global::{
        current,
        init,
        init_from_config,
        install,
        reset,
    },
    handler::{
        Handler,
        HandlerOption,
    },
    palette::{
        Palette,
        Style,
    },
    renderer::{
        AttributeTable,
        Renderer,
    },
    severity::Severity,
};
