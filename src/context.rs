//! Strategy context
//!
//! Binds one sorting strategy and an optional tracer, and turns a single sort
//! call into a timed, instrumented [`SortExecution`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use crate::constants::{attributes, operation_types, spans};
use crate::error::{AppError, AppResult};
use crate::models::{RunStats, SortExecution};
use crate::strategies::{SortOutput, SortStrategy};
use crate::telemetry::{end_span_ok, record_error_to_span, KeyValue, Span, Tracer};

/// Executes the bound strategy against a dataset
#[derive(Default)]
pub struct SortContext<'s> {
    strategy: Option<&'s dyn SortStrategy>,
    tracer: Option<Arc<dyn Tracer>>,
    last_stats: Option<RunStats>,
}

impl<'s> SortContext<'s> {
    /// Create a context with no strategy and no tracer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: &'s dyn SortStrategy) -> Self {
        Self {
            strategy: Some(strategy),
            ..Self::default()
        }
    }

    pub fn set_strategy(&mut self, strategy: &'s dyn SortStrategy) {
        self.strategy = Some(strategy);
    }

    pub fn set_tracer(&mut self, tracer: Arc<dyn Tracer>) {
        self.tracer = Some(tracer);
    }

    pub fn clear_tracer(&mut self) {
        self.tracer = None;
    }

    /// Statistics of the most recent successful execution
    pub fn last_stats(&self) -> Option<RunStats> {
        self.last_stats
    }

    /// Run the bound strategy on `data`.
    ///
    /// With a tracer attached the call is wrapped in a `sort_{name}` span that
    /// is always ended, whether the sort succeeds, fails or panics. A panic is
    /// reported as [`AppError::AlgorithmExecution`].
    pub fn execute_strategy(&mut self, data: &[i64]) -> AppResult<SortExecution> {
        let strategy = self.strategy.ok_or(AppError::NoStrategyConfigured)?;
        let name = strategy.name();

        let Some(tracer) = self.tracer.clone() else {
            let (output, elapsed_ms) = run_timed(strategy, data, None)?;
            return Ok(self.finish(name, data.len(), output, elapsed_ms));
        };

        let mut span = tracer.start_span(
            &format!("{}{}", spans::SORT_PREFIX, name),
            &[
                KeyValue::new(attributes::ALGORITHM_NAME, name),
                KeyValue::new(attributes::ARRAY_LENGTH, data.len()),
                KeyValue::new(attributes::OPERATION_TYPE, operation_types::SORTING),
            ],
        );

        match run_timed(strategy, data, Some(span.as_mut())) {
            Ok((output, elapsed_ms)) => {
                end_span_ok(
                    span.as_mut(),
                    &[
                        KeyValue::new(attributes::EXECUTION_TIME_MS, elapsed_ms),
                        KeyValue::new(attributes::COMPARISONS, output.counts.comparisons),
                        KeyValue::new(attributes::SWAPS, output.counts.swaps),
                    ],
                );
                Ok(self.finish(name, data.len(), output, elapsed_ms))
            }
            Err(err) => {
                record_error_to_span(span.as_mut(), &err);
                Err(err)
            }
        }
    }

    fn finish(
        &mut self,
        name: &str,
        array_length: usize,
        output: SortOutput,
        elapsed_ms: f64,
    ) -> SortExecution {
        let stats = RunStats::new(output.counts, elapsed_ms, array_length);
        self.last_stats = Some(stats);

        SortExecution {
            algorithm_name: name.to_string(),
            sorted_array: output.sorted,
            stats,
        }
    }
}

/// Time the sort call alone, converting a panic into an error
fn run_timed(
    strategy: &dyn SortStrategy,
    data: &[i64],
    span: Option<&mut dyn Span>,
) -> AppResult<(SortOutput, f64)> {
    let start = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| strategy.sort_traced(data, span)));
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    match result {
        Ok(outcome) => outcome.map(|output| (output, elapsed_ms)),
        Err(payload) => Err(AppError::execution(strategy.name(), panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
