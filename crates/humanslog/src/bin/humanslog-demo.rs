//! Prints a few sample events through the global handler

use std::{
    io,
    time::Duration,
};
use tracing::{
    debug,
    error,
    info,
    trace,
    warn,
};

fn main() -> Result<(), humanslog::InstallError> {
    humanslog::init()?;

    trace!("below every default threshold");
    debug!(cache_entries = 128, "cache warmed");
    info!(port = 8080, tls = false, "started");
    warn!(
        upstream = "db-primary",
        elapsed = ?Duration::from_millis(1500),
        retries = 3,
        "slow upstream"
    );

    let err = io::Error::new(io::ErrorKind::ConnectionReset, "peer reset");
    error!(
        error = &err as &(dyn std::error::Error + 'static),
        query = "SELECT *\nFROM accounts",
        "request failed"
    );
    info!("shutting down");

    Ok(())
}
