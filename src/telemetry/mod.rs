//! Instrumentation port
//!
//! The sorting engine only ever talks to the [`Tracer`] and [`Span`] traits
//! defined here. Two adapters ship with the crate:
//!
//! - [`TracingTracer`]: maps spans onto the `tracing` ecosystem, so whatever
//!   subscriber the binary installs receives them
//! - [`InMemoryTracer`]: keeps finished spans in memory for inspection
//!
//! Exporting to a particular tracing vendor is left to the subscriber.

pub mod memory;
pub mod tracing_tracer;

use std::fmt;

use crate::constants::attributes;
use crate::error::AppError;

pub use memory::{InMemoryTracer, SpanRecord};
pub use tracing_tracer::TracingTracer;

/// Attribute value attached to spans and span events
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::I64(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::I64(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::I64(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// A single span attribute
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    pub key: &'static str,
    pub value: Value,
}

impl KeyValue {
    pub fn new(key: &'static str, value: impl Into<Value>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Render attributes as `key=value` pairs for log output
pub fn format_attributes(attributes: &[KeyValue]) -> String {
    attributes
        .iter()
        .map(|kv| format!("{}={}", kv.key, kv.value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Span completion status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpanStatus {
    #[default]
    Unset,
    Ok,
    Error,
}

impl SpanStatus {
    /// Numeric status code as used by OpenTelemetry
    pub fn code(&self) -> u8 {
        match self {
            SpanStatus::Unset => 0,
            SpanStatus::Ok => 1,
            SpanStatus::Error => 2,
        }
    }
}

/// A unit of traced work
#[cfg_attr(test, mockall::automock)]
pub trait Span {
    fn set_attributes(&mut self, attributes: &[KeyValue]);

    fn add_event(&mut self, name: &str, attributes: &[KeyValue]);

    fn set_status(&mut self, status: SpanStatus, message: &str);

    fn record_exception(&mut self, error: &AppError);

    /// Close the span. Spans are closed in the reverse order they were started.
    fn end(&mut self);
}

/// Factory for spans
#[cfg_attr(test, mockall::automock)]
pub trait Tracer: Send + Sync {
    fn start_span(&self, name: &str, attributes: &[KeyValue]) -> Box<dyn Span>;
}

/// Mark a span as successful with the given result attributes and close it
pub fn end_span_ok(span: &mut dyn Span, attributes: &[KeyValue]) {
    span.set_attributes(attributes);
    span.set_attributes(&[KeyValue::new(attributes::SUCCESS, true)]);
    span.end();
}

/// Record a failure on a span and close it
pub fn record_error_to_span(span: &mut dyn Span, error: &AppError) {
    span.set_status(SpanStatus::Error, &error.to_string());
    span.record_exception(error);
    span.set_attributes(&[KeyValue::new(attributes::SUCCESS, false)]);
    span.end();
}
