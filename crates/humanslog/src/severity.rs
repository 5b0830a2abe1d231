//! Severity levels ordered by urgency

use serde::{
    Deserialize,
    Serialize,
};
use std::{
    fmt,
    str::FromStr,
};
use thiserror::Error;
use tracing::Level;

/// Importance of a log event.
///
/// Ordered by increasing urgency, so `Severity::Warn > Severity::Info`.
/// Note that this is the reverse of `tracing::Level`, where more verbose
/// levels compare greater.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace,
    Debug,
    #[default]
    Info,
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Upper-case label shown in the rendered header
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::TRACE => Severity::Trace,
            Level::DEBUG => Severity::Debug,
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warn,
            Level::ERROR => Severity::Error,
        }
    }
}

impl From<&Level> for Severity {
    fn from(level: &Level) -> Self {
        Self::from(*level)
    }
}

/// Returned when a severity name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity `{0}` (expected trace, debug, info, warn or error)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordered_by_urgency() {
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);

        let mut sorted = Severity::ALL;
        sorted.sort();
        assert_eq!(sorted, Severity::ALL);
    }

    #[test]
    fn test_from_tracing_level() {
        assert_eq!(Severity::from(Level::TRACE), Severity::Trace);
        assert_eq!(Severity::from(Level::DEBUG), Severity::Debug);
        assert_eq!(Severity::from(Level::INFO), Severity::Info);
        assert_eq!(Severity::from(&Level::WARN), Severity::Warn);
        assert_eq!(Severity::from(Level::ERROR), Severity::Error);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("DEBUG".parse(), Ok(Severity::Debug));
        assert_eq!(" info ".parse(), Ok(Severity::Info));
        assert_eq!("warning".parse(), Ok(Severity::Warn));
        assert_eq!(
            "loud".parse::<Severity>(),
            Err(ParseSeverityError("loud".to_string()))
        );
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> =
            Severity::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"]);
    }
}
