//! Instrumentation port backed by the `tracing` crate

use std::time::Instant;

use tracing::span::EnteredSpan;

use super::{format_attributes, KeyValue, Span, SpanStatus, Tracer};
use crate::error::AppError;

/// Tracer that opens a `tracing` span per port span
///
/// Spans are entered when started and exited when ended, so nested port spans
/// show up nested in the subscriber output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTracer;

impl TracingTracer {
    pub fn new() -> Self {
        Self
    }
}

impl Tracer for TracingTracer {
    fn start_span(&self, name: &str, attributes: &[KeyValue]) -> Box<dyn Span> {
        let span = tracing::info_span!("span", span_name = %name);
        let entered = span.entered();
        tracing::debug!(attributes = %format_attributes(attributes), "span started");

        Box::new(TracingSpan {
            name: name.to_string(),
            started_at: Instant::now(),
            status: SpanStatus::Unset,
            entered: Some(entered),
        })
    }
}

struct TracingSpan {
    name: String,
    started_at: Instant,
    status: SpanStatus,
    entered: Option<EnteredSpan>,
}

impl Span for TracingSpan {
    fn set_attributes(&mut self, attributes: &[KeyValue]) {
        tracing::debug!(span_name = %self.name, attributes = %format_attributes(attributes), "span attributes");
    }

    fn add_event(&mut self, name: &str, attributes: &[KeyValue]) {
        tracing::trace!(span_name = %self.name, event = name, attributes = %format_attributes(attributes), "span event");
    }

    fn set_status(&mut self, status: SpanStatus, message: &str) {
        self.status = status;
        if status == SpanStatus::Error {
            tracing::warn!(span_name = %self.name, code = status.code(), "{}", message);
        }
    }

    fn record_exception(&mut self, error: &AppError) {
        tracing::error!(span_name = %self.name, code = error.error_code(), "{}", error);
    }

    fn end(&mut self) {
        if let Some(entered) = self.entered.take() {
            tracing::debug!(
                span_name = %self.name,
                status = ?self.status,
                elapsed_ms = self.started_at.elapsed().as_secs_f64() * 1000.0,
                "span ended"
            );
            drop(entered);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Records span enters/exits by port span name, and counts events
    #[derive(Clone, Default)]
    struct Recorder {
        names: Arc<Mutex<HashMap<u64, String>>>,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Recorder {
        fn log(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }

        fn transitions(&self) -> Vec<String> {
            self.log()
                .into_iter()
                .filter(|entry| entry.starts_with("enter") || entry.starts_with("exit"))
                .collect()
        }

        fn push(&self, kind: &str, id: &Id) {
            let name = self.names.lock().unwrap().get(&id.into_u64()).cloned().unwrap_or_default();
            self.log.lock().unwrap().push(format!("{} {}", kind, name));
        }
    }

    struct SpanName(Option<String>);

    impl Visit for SpanName {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "span_name" {
                self.0 = Some(format!("{:?}", value));
            }
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for Recorder {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, _ctx: Context<'_, S>) {
            let mut visitor = SpanName(None);
            attrs.record(&mut visitor);
            if let Some(name) = visitor.0 {
                self.names.lock().unwrap().insert(id.into_u64(), name);
            }
        }

        fn on_enter(&self, id: &Id, _ctx: Context<'_, S>) {
            self.push("enter", id);
        }

        fn on_exit(&self, id: &Id, _ctx: Context<'_, S>) {
            self.push("exit", id);
        }

        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.log.lock().unwrap().push("event".to_string());
        }
    }

    #[test]
    fn test_spans_nest_and_end_once() {
        let recorder = Recorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());

        tracing::subscriber::with_default(subscriber, || {
            let tracer = TracingTracer::new();
            let mut outer = tracer.start_span("outer", &[KeyValue::new("operation.type", "benchmark")]);
            let mut inner = tracer.start_span("inner", &[]);

            inner.add_event("progress", &[KeyValue::new("iteration", 1u32)]);
            inner.end();

            let after_first_end = recorder.log().len();
            inner.end();
            assert_eq!(recorder.log().len(), after_first_end);

            outer.set_status(SpanStatus::Error, "failed");
            outer.end();
            outer.end();
        });

        assert_eq!(
            recorder.transitions(),
            vec!["enter outer", "enter inner", "exit inner", "exit outer"]
        );
    }

    #[test]
    fn test_events_are_emitted_inside_the_span() {
        let recorder = Recorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());

        tracing::subscriber::with_default(subscriber, || {
            let mut span = TracingTracer::new().start_span("sort_Heap Sort", &[]);
            span.add_event("comparison", &[]);
            span.end();
        });

        let log = recorder.log();
        assert_eq!(log.first().map(String::as_str), Some("enter sort_Heap Sort"));
        assert_eq!(log.last().map(String::as_str), Some("exit sort_Heap Sort"));
        // started, comparison, ended
        assert_eq!(log.iter().filter(|entry| *entry == "event").count(), 3);
    }
}
