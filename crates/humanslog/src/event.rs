//! Structured log events handed to the renderer

use crate::severity::Severity;
use chrono::{
    DateTime,
    FixedOffset,
    Utc,
};
use std::{
    error::Error,
    fmt,
    time::Duration,
};

/// An attribute value.
///
/// Each variant knows how to print itself; the renderer only ever calls
/// `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    Duration(Duration),
    /// `Display` text of an error
    Error(String),
    /// `Debug` text of any other value
    Debug(String),
}

impl Value {
    pub fn error(err: &(dyn Error + 'static)) -> Self {
        Value::Error(err.to_string())
    }

    pub fn debug(value: &dyn fmt::Debug) -> Self {
        Value::Debug(format!("{:?}", value))
    }
}

impl fmt::Display for Value {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Value::Str(s) | Value::Error(s) | Value::Debug(s) =>
                f.write_str(s),
            Value::I64(n) => write!(f, "{}", n),
            Value::U64(n) => write!(f, "{}", n),
            Value::F64(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Duration(d) => write!(f, "{:?}", d),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

value_from! {
    String => Str,
    &str => Str,
    i64 => I64,
    i32 => I64,
    i16 => I64,
    i8 => I64,
    u64 => U64,
    u32 => U64,
    u16 => U64,
    u8 => U64,
    f64 => F64,
    f32 => F64,
    bool => Bool,
    Duration => Duration,
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::U64(v as u64)
    }
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::I64(v as i64)
    }
}

/// A key/value pair attached to an event
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub value: Value,
}

impl Attribute {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One log record.
///
/// `attributes` keep the order they were supplied in; keys may repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub timestamp: DateTime<FixedOffset>,
    pub severity: Severity,
    pub message: String,
    pub attributes: Vec<Attribute>,
}

impl LogEvent {
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn at(
        mut self,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_attr(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }
}

impl Default for LogEvent {
    /// Zero event: epoch timestamp (UTC), info severity, empty message
    fn default() -> Self {
        Self {
            timestamp: DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
            severity: Severity::default(),
            message: String::new(),
            attributes: Vec::new(),
        }
    }
}
