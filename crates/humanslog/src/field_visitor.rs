//! Collects the fields of a `tracing` event into a message and attributes

use crate::event::{
    Attribute,
    Value,
};
use std::{
    error::Error,
    fmt,
};
use tracing::field::{
    Field,
    Visit,
};

const MESSAGE_FIELD: &str = "message";

/// Visitor that keeps fields in the order they were recorded
#[derive(Debug, Default)]
pub(crate) struct EventVisitor {
    pub(crate) message: String,
    pub(crate) attributes: Vec<Attribute>,
}

impl EventVisitor {
    fn record(
        &mut self,
        field: &Field,
        value: Value,
    ) {
        if field.name() == MESSAGE_FIELD {
            self.message = value.to_string();
        } else {
            self.attributes.push(Attribute::new(field.name(), value));
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(
        &mut self,
        field: &Field,
        value: &dyn fmt::Debug,
    ) {
        self.record(field, Value::debug(value));
    }

    fn record_str(
        &mut self,
        field: &Field,
        value: &str,
    ) {
        self.record(field, Value::from(value));
    }

    fn record_i64(
        &mut self,
        field: &Field,
        value: i64,
    ) {
        self.record(field, Value::I64(value));
    }

    fn record_u64(
        &mut self,
        field: &Field,
        value: u64,
    ) {
        self.record(field, Value::U64(value));
    }

    fn record_f64(
        &mut self,
        field: &Field,
        value: f64,
    ) {
        self.record(field, Value::F64(value));
    }

    fn record_bool(
        &mut self,
        field: &Field,
        value: bool,
    ) {
        self.record(field, Value::Bool(value));
    }

    fn record_error(
        &mut self,
        field: &Field,
        value: &(dyn Error + 'static),
    ) {
        self.record(field, Value::error(value));
    }
}
