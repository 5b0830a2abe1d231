//! Error types

use crate::severity::ParseSeverityError;
use std::{
    io,
    path::PathBuf,
};
use thiserror::Error;

/// The destination rejected a write while an event was being rendered
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write log record: {0}")]
    Write(#[from] io::Error),
}

/// The forwarding subscriber could not become the global `tracing` default
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("another global tracing subscriber is already installed")]
    DispatcherTaken,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {var}: {source}")]
    Severity {
        var: &'static str,
        #[source]
        source: ParseSeverityError,
    },
    #[error("invalid value for {var}: `{value}`")]
    Env { var: &'static str, value: String },
}
