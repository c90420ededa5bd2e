//! Benchmark runner - Orchestrates the benchmarking process

use std::path::Path;
use std::sync::Arc;

use crate::{
    constants::{attributes, events, operation_types, spans},
    context::SortContext,
    dataset,
    error::{AppError, AppResult},
    models::{AlgorithmFailure, BenchmarkResult, Comparison, SortExecution},
    strategies::SortStrategy,
    telemetry::{end_span_ok, record_error_to_span, KeyValue, Span, Tracer},
};

use super::{metrics::MetricsCollector, validation::is_sorted};

/// Runs sorting strategies repeatedly over a dataset and ranks them
pub struct BenchmarkRunner {
    tracer: Option<Arc<dyn Tracer>>,
}

impl BenchmarkRunner {
    /// Create a new benchmark runner, optionally instrumented
    pub fn new(tracer: Option<Arc<dyn Tracer>>) -> Self {
        Self { tracer }
    }

    /// Benchmark one strategy: `repeat_count` timed runs, averaged.
    ///
    /// Any failing iteration aborts the whole algorithm; there is no partial result.
    pub fn run_algorithm(
        &self,
        strategy: &dyn SortStrategy,
        data: &[i64],
        repeat_count: u32,
    ) -> AppResult<BenchmarkResult> {
        check_repeat_count(repeat_count)?;

        let name = strategy.name();
        tracing::debug!("Benchmarking {} on {} elements", name, data.len());

        let mut span = self.start_span(
            &format!("{}{}", spans::BENCHMARK_PREFIX, name),
            &[
                KeyValue::new(attributes::ALGORITHM_NAME, name),
                KeyValue::new(attributes::ARRAY_LENGTH, data.len()),
                KeyValue::new(attributes::REPEAT_COUNT, repeat_count),
                KeyValue::new(attributes::OPERATION_TYPE, operation_types::BENCHMARK),
            ],
        );

        let outcome = self.repeat(strategy, data, repeat_count);

        if let Some(span) = span.as_deref_mut() {
            match &outcome {
                Ok(result) => end_span_ok(
                    span,
                    &[
                        KeyValue::new(attributes::AVG_EXECUTION_TIME_MS, result.stats.execution_time_ms),
                        KeyValue::new(attributes::AVG_COMPARISONS, result.stats.comparisons),
                        KeyValue::new(attributes::AVG_SWAPS, result.stats.swaps),
                        KeyValue::new(attributes::TOTAL_ITERATIONS, result.iterations),
                    ],
                ),
                Err(err) => record_error_to_span(span, err),
            }
        }

        outcome
    }

    /// Benchmark every strategy in order and rank the survivors.
    ///
    /// A failing strategy is logged and listed in [`Comparison::failures`];
    /// the remaining strategies still run.
    pub fn run_all_algorithms(
        &self,
        data: &[i64],
        algorithms: &[&dyn SortStrategy],
        repeat_count: u32,
    ) -> AppResult<Comparison> {
        self.process_dataset(data, algorithms, repeat_count, None)
    }

    /// Load a dataset file, then benchmark every strategy against it
    pub fn run_dataset_file(
        &self,
        path: &Path,
        algorithms: &[&dyn SortStrategy],
        repeat_count: u32,
    ) -> AppResult<Comparison> {
        let data = dataset::read_dataset(path)?;
        tracing::info!("Loaded {} values from {}", data.len(), path.display());

        self.process_dataset(&data, algorithms, repeat_count, Some(path))
    }

    fn process_dataset(
        &self,
        data: &[i64],
        algorithms: &[&dyn SortStrategy],
        repeat_count: u32,
        source: Option<&Path>,
    ) -> AppResult<Comparison> {
        check_repeat_count(repeat_count)?;

        let mut span = self.start_span(
            spans::PROCESS_DATASET,
            &[
                KeyValue::new(attributes::ARRAY_LENGTH, data.len()),
                KeyValue::new(attributes::REPEAT_COUNT, repeat_count),
                KeyValue::new(attributes::OPERATION_TYPE, operation_types::DATASET_PROCESSING),
            ],
        );

        if let (Some(span), Some(path)) = (span.as_deref_mut(), source) {
            let file = path.display().to_string();
            span.set_attributes(&[KeyValue::new(attributes::DATA_FILE, file)]);
            span.add_event(
                events::DATA_LOADED,
                &[KeyValue::new(attributes::ARRAY_LENGTH, data.len())],
            );
        }

        let mut comparison = Comparison {
            array_length: data.len(),
            ..Comparison::default()
        };

        for strategy in algorithms {
            let name = strategy.name();

            match self.run_algorithm(*strategy, data, repeat_count) {
                Ok(result) => {
                    tracing::info!(
                        "{}: {:.3} ms, {:.0} comparisons, {:.0} swaps, sorted: {}",
                        name,
                        result.stats.execution_time_ms,
                        result.stats.comparisons,
                        result.stats.swaps,
                        result.is_sorted
                    );
                    if !result.is_sorted {
                        tracing::warn!("{} produced unsorted output", name);
                    }
                    if let Some(span) = span.as_deref_mut() {
                        span.add_event(
                            events::ALGORITHM_COMPLETED,
                            &[
                                KeyValue::new(attributes::ALGORITHM_NAME, name),
                                KeyValue::new(attributes::AVG_EXECUTION_TIME_MS, result.stats.execution_time_ms),
                                KeyValue::new(attributes::AVG_COMPARISONS, result.stats.comparisons),
                                KeyValue::new(attributes::AVG_SWAPS, result.stats.swaps),
                                KeyValue::new(attributes::IS_SORTED, result.is_sorted),
                            ],
                        );
                    }
                    comparison.results.push(result);
                }
                Err(e) => {
                    tracing::error!("Error executing {}: {}", name, e);
                    if let Some(span) = span.as_deref_mut() {
                        span.add_event(
                            events::ALGORITHM_ERROR,
                            &[
                                KeyValue::new(attributes::ALGORITHM_NAME, name),
                                KeyValue::new("error.message", e.to_string()),
                            ],
                        );
                    }
                    comparison.failures.push(AlgorithmFailure::from_error(name, &e));
                }
            }
        }

        comparison.rank();

        if let Some(span) = span.as_deref_mut() {
            let mut summary = Vec::new();
            if let Some(fastest) = comparison.fastest() {
                summary.push(KeyValue::new(attributes::FASTEST_ALGORITHM, fastest.algorithm_name.as_str()));
            }
            if let Some(slowest) = comparison.slowest() {
                summary.push(KeyValue::new(attributes::SLOWEST_ALGORITHM, slowest.algorithm_name.as_str()));
            }
            end_span_ok(span, &summary);
        }

        Ok(comparison)
    }

    fn repeat(
        &self,
        strategy: &dyn SortStrategy,
        data: &[i64],
        repeat_count: u32,
    ) -> AppResult<BenchmarkResult> {
        let mut context = SortContext::with_strategy(strategy);
        if let Some(tracer) = &self.tracer {
            context.set_tracer(Arc::clone(tracer));
        }

        let mut metrics = MetricsCollector::new(data.len());
        let mut last_output = Vec::new();

        for iteration in 1..=repeat_count {
            let execution =
                self.run_iteration(&mut context, strategy.name(), data, iteration, repeat_count)?;
            metrics.record(iteration, &execution.stats);
            last_output = execution.sorted_array;
        }

        let stats = metrics
            .aggregate()
            .ok_or_else(|| AppError::InvalidInput("no iterations were recorded".to_string()))?;

        Ok(BenchmarkResult {
            algorithm_name: strategy.name().to_string(),
            stats,
            is_sorted: is_sorted(&last_output),
            iterations: repeat_count,
        })
    }

    fn run_iteration(
        &self,
        context: &mut SortContext<'_>,
        name: &str,
        data: &[i64],
        iteration: u32,
        total: u32,
    ) -> AppResult<SortExecution> {
        let Some(mut span) = self.start_span(
            &format!("{}{}", spans::ITERATION_PREFIX, iteration),
            &[
                KeyValue::new(attributes::ALGORITHM_NAME, name),
                KeyValue::new(attributes::ARRAY_LENGTH, data.len()),
                KeyValue::new(attributes::ITERATION, iteration),
                KeyValue::new(attributes::TOTAL_ITERATIONS, total),
                KeyValue::new(attributes::OPERATION_TYPE, operation_types::SORTING_ITERATION),
            ],
        ) else {
            return context.execute_strategy(data);
        };

        match context.execute_strategy(data) {
            Ok(execution) => {
                end_span_ok(
                    span.as_mut(),
                    &[
                        KeyValue::new(attributes::EXECUTION_TIME_MS, execution.stats.execution_time_ms),
                        KeyValue::new(attributes::COMPARISONS, execution.stats.comparisons),
                        KeyValue::new(attributes::SWAPS, execution.stats.swaps),
                    ],
                );
                Ok(execution)
            }
            Err(e) => {
                record_error_to_span(span.as_mut(), &e);
                Err(e)
            }
        }
    }

    fn start_span(&self, name: &str, attributes: &[KeyValue]) -> Option<Box<dyn Span>> {
        self.tracer
            .as_ref()
            .map(|tracer| tracer.start_span(name, attributes))
    }
}

fn check_repeat_count(repeat_count: u32) -> AppResult<()> {
    if repeat_count == 0 {
        return Err(AppError::InvalidInput(
            "repeat count must be at least 1".to_string(),
        ));
    }
    Ok(())
}
