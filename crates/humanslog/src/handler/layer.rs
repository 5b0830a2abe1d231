//! `tracing_subscriber::Layer` implementation
//!
//! Only events are rendered. Span fields are never recorded, so events are
//! not decorated with the attributes of the spans they occur in; every event
//! renders exactly the fields it was emitted with.

use super::Handler;
use crate::severity::Severity;
use tracing::{
    Event,
    Metadata,
    Subscriber,
};
use tracing_subscriber::layer::{
    Context,
    Layer,
};

impl<S: Subscriber> Layer<S> for Handler {
    fn enabled(
        &self,
        metadata: &Metadata<'_>,
        _ctx: Context<'_, S>,
    ) -> bool {
        !metadata.is_event()
            || Handler::enabled(self, Severity::from(metadata.level()))
    }

    fn on_event(
        &self,
        event: &Event<'_>,
        _ctx: Context<'_, S>,
    ) {
        let record = self.capture(event);
        if let Err(err) = self.handle(&record) {
            // Not routed through tracing: the broken sink may be this one
            eprintln!("humanslog: dropped `{}`: {}", record.message, err);
        }
    }
}
