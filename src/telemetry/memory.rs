//! In-memory span recorder

use std::sync::{Arc, Mutex, MutexGuard};

use super::{KeyValue, Span, SpanStatus, Tracer, Value};
use crate::error::AppError;

/// Everything recorded about one span
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanRecord {
    pub name: String,
    /// Index of the span that was open when this one started
    pub parent: Option<usize>,
    pub attributes: Vec<KeyValue>,
    pub events: Vec<(String, Vec<KeyValue>)>,
    pub status: SpanStatus,
    pub status_message: Option<String>,
    pub exceptions: Vec<String>,
    pub ended: bool,
}

impl SpanRecord {
    /// Latest value set for an attribute
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .rev()
            .find(|kv| kv.key == key)
            .map(|kv| &kv.value)
    }

    pub fn event_names(&self) -> Vec<&str> {
        self.events.iter().map(|(name, _)| name.as_str()).collect()
    }
}

#[derive(Debug, Default)]
struct Recorder {
    spans: Vec<SpanRecord>,
    open: Vec<usize>,
}

/// Tracer that keeps every span it creates
#[derive(Debug, Clone, Default)]
pub struct InMemoryTracer {
    inner: Arc<Mutex<Recorder>>,
}

impl InMemoryTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all spans, in start order
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.lock().spans.clone()
    }

    /// First span with the given name
    pub fn find(&self, name: &str) -> Option<SpanRecord> {
        self.lock().spans.iter().find(|s| s.name == name).cloned()
    }

    /// Number of spans that were started but not ended yet
    pub fn open_spans(&self) -> usize {
        self.lock().open.len()
    }

    fn lock(&self) -> MutexGuard<'_, Recorder> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Tracer for InMemoryTracer {
    fn start_span(&self, name: &str, attributes: &[KeyValue]) -> Box<dyn Span> {
        let mut recorder = self.lock();
        let index = recorder.spans.len();
        let parent = recorder.open.last().copied();

        recorder.spans.push(SpanRecord {
            name: name.to_string(),
            parent,
            attributes: attributes.to_vec(),
            ..SpanRecord::default()
        });
        recorder.open.push(index);

        Box::new(RecordedSpan {
            index,
            inner: Arc::clone(&self.inner),
        })
    }
}

struct RecordedSpan {
    index: usize,
    inner: Arc<Mutex<Recorder>>,
}

impl RecordedSpan {
    fn with_record(&self, f: impl FnOnce(&mut SpanRecord)) {
        let mut recorder = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(record) = recorder.spans.get_mut(self.index) {
            f(record);
        }
    }
}

impl Span for RecordedSpan {
    fn set_attributes(&mut self, attributes: &[KeyValue]) {
        self.with_record(|record| record.attributes.extend_from_slice(attributes));
    }

    fn add_event(&mut self, name: &str, attributes: &[KeyValue]) {
        self.with_record(|record| record.events.push((name.to_string(), attributes.to_vec())));
    }

    fn set_status(&mut self, status: SpanStatus, message: &str) {
        self.with_record(|record| {
            record.status = status;
            record.status_message = Some(message.to_string());
        });
    }

    fn record_exception(&mut self, error: &AppError) {
        self.with_record(|record| record.exceptions.push(error.to_string()));
    }

    fn end(&mut self) {
        let mut recorder = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let index = self.index;
        recorder.open.retain(|&open| open != index);
        if let Some(record) = recorder.spans.get_mut(index) {
            record.ended = true;
        }
    }
}
