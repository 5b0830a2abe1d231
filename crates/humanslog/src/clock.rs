//! Time source used to stamp events

use chrono::{
    DateTime,
    FixedOffset,
    Local,
};
use std::fmt;

/// Supplies the timestamp of events captured from `tracing`
pub trait Clock: fmt::Debug + Send + Sync + 'static {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
