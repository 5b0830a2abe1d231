//! Configuration types

use crate::severity::Severity;
use serde::{
    Deserialize,
    Serialize,
};

fn default_true() -> bool {
    true
}

/// Destination stream for rendered events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Stdout,
    Stderr,
}

/// Settings for building a [`Handler`](crate::Handler)
///
/// Example file:
/// ```toml
/// level = "debug"
/// enable_ansi = false
/// output = "stderr"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HumanLogConfig {
    /// Minimum severity that is rendered
    #[serde(default)]
    pub level: Severity,
    /// Colored severity labels and bold messages
    #[serde(default = "default_true")]
    pub enable_ansi: bool,
    /// Stream the handler writes to
    #[serde(default)]
    pub output: Output,
}

impl Default for HumanLogConfig {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            enable_ansi: true,
            output: Output::Stdout,
        }
    }
}
