//! Process-wide default handler
//!
//! `tracing` allows its global dispatcher to be set only once per process, so
//! a small forwarding layer is installed as the global dispatcher the first
//! time a handler is installed. The forwarder routes every event to whichever
//! handler currently occupies a single global slot. [`install`] replaces that
//! slot wholesale and [`reset`] empties it.

use crate::{
    config::HumanLogConfig,
    error::InstallError,
    handler::Handler,
    severity::Severity,
};
use once_cell::sync::{
    Lazy,
    OnceCell,
};
use std::sync::{
    Arc,
    PoisonError,
    RwLock,
};
use tracing::{
    Event,
    Metadata,
    Subscriber,
    subscriber::Interest,
};
use tracing_subscriber::layer::{
    Context,
    Layer,
    SubscriberExt,
};

static CURRENT: Lazy<RwLock<Option<Arc<Handler>>>> =
    Lazy::new(|| RwLock::new(None));

static FORWARDER_INSTALLED: OnceCell<bool> = OnceCell::new();

/// Install a stdout handler with minimum severity `Debug` as the default
pub fn init() -> Result<(), InstallError> {
    install(Handler::default().with_min_severity(Severity::Debug))
}

/// Install a handler built from [`HumanLogConfig::load`]
pub fn init_from_config() -> Result<(), InstallError> {
    install(HumanLogConfig::load().into_handler())
}

/// Replace the process-wide default handler.
///
/// Fails only if some other subscriber already owns the global `tracing`
/// dispatcher; the slot is left untouched in that case.
pub fn install(handler: Handler) -> Result<(), InstallError> {
    let forwarding = *FORWARDER_INSTALLED.get_or_init(|| {
        let subscriber = tracing_subscriber::registry().with(Forwarder);
        tracing::subscriber::set_global_default(subscriber).is_ok()
    });
    if !forwarding {
        return Err(InstallError::DispatcherTaken);
    }

    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) =
        Some(Arc::new(handler));
    tracing::callsite::rebuild_interest_cache();
    Ok(())
}

/// Remove the current default handler; events are discarded until the next
/// [`install`]
pub fn reset() {
    CURRENT
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    tracing::callsite::rebuild_interest_cache();
}

/// The currently installed handler, if any
pub fn current() -> Option<Arc<Handler>> {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Global-dispatcher layer that delegates to the slot
struct Forwarder;

impl<S: Subscriber> Layer<S> for Forwarder {
    fn register_callsite(
        &self,
        _metadata: &'static Metadata<'static>,
    ) -> Interest {
        // The slot can change at any time, so never cache a decision
        Interest::sometimes()
    }

    fn enabled(
        &self,
        metadata: &Metadata<'_>,
        _ctx: Context<'_, S>,
    ) -> bool {
        if !metadata.is_event() {
            return true;
        }
        current().is_some_and(|handler| {
            Handler::enabled(&handler, Severity::from(metadata.level()))
        })
    }

    fn on_event(
        &self,
        event: &Event<'_>,
        ctx: Context<'_, S>,
    ) {
        if let Some(handler) = current() {
            Layer::<S>::on_event(&*handler, event, ctx);
        }
    }
}
