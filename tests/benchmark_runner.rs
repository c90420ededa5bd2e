//! Orchestration behaviour: aggregation, failure isolation, instrumentation.

use std::cell::Cell;
use std::sync::Arc;

use sortbench::benchmark::BenchmarkRunner;
use sortbench::error::{AppError, AppResult};
use sortbench::report;
use sortbench::strategies::{Algorithm, Operations, SortStrategy};
use sortbench::telemetry::{InMemoryTracer, SpanStatus, Value};
use sortbench::{dataset, SortContext};

/// Reports `n` comparisons on its n-th call
struct CallCounting {
    calls: Cell<u64>,
}

impl SortStrategy for CallCounting {
    fn name(&self) -> &'static str {
        "Call Counting Sort"
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        for _ in 0..call {
            ops.compare(0i64, 0i64);
        }

        let mut sorted = input.to_vec();
        sorted.sort_unstable();
        Ok(sorted)
    }
}

struct Broken;

impl SortStrategy for Broken {
    fn name(&self) -> &'static str {
        "Broken Sort"
    }

    fn sort_with(&self, _input: &[i64], _ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        Err(AppError::execution(self.name(), "intentional failure"))
    }
}

struct Panicking;

impl SortStrategy for Panicking {
    fn name(&self) -> &'static str {
        "Panicking Sort"
    }

    fn sort_with(&self, input: &[i64], _ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let _ = input[input.len() + 1];
        Ok(Vec::new())
    }
}

/// A variant that never overrides the algorithm body
struct Abstract;

impl SortStrategy for Abstract {
    fn name(&self) -> &'static str {
        "Abstract Sort"
    }
}

#[test]
fn test_mean_over_repeats() {
    let variant = CallCounting { calls: Cell::new(0) };
    let runner = BenchmarkRunner::new(None);

    let result = runner.run_algorithm(&variant, &[3, 1, 2], 5).unwrap();

    assert_eq!(variant.calls.get(), 5);
    assert_eq!(result.stats.comparisons, 3.0);
    assert_eq!(result.stats.swaps, 0.0);
    assert_eq!(result.iterations, 5);
    assert!(result.is_sorted);
}

#[test]
fn test_partial_failure_is_tolerated() {
    let first = Algorithm::Merge;
    let third = Algorithm::Shell;
    let algorithms: [&dyn SortStrategy; 3] = [&first, &Broken, &third];

    let runner = BenchmarkRunner::new(None);
    let comparison = runner.run_all_algorithms(&[5, 3, 9, 1], &algorithms, 3).unwrap();

    assert_eq!(comparison.results.len(), 2);
    assert!(comparison.results.iter().all(|r| r.algorithm_name != "Broken Sort"));
    assert_eq!(comparison.failures.len(), 1);
    assert_eq!(comparison.failures[0].algorithm_name, "Broken Sort");
    assert_eq!(comparison.failures[0].error_code, "ALGORITHM_EXECUTION_ERROR");
}

#[test]
fn test_panics_and_missing_bodies_are_failures() {
    let algorithms: [&dyn SortStrategy; 3] = [&Panicking, &Algorithm::Quick, &Abstract];

    let tracer = InMemoryTracer::new();
    let runner = BenchmarkRunner::new(Some(Arc::new(tracer.clone())));
    let comparison = runner.run_all_algorithms(&[2, 1], &algorithms, 2).unwrap();

    assert_eq!(comparison.results.len(), 1);
    assert_eq!(comparison.results[0].algorithm_name, "Quick Sort");

    let codes: Vec<&str> = comparison.failures.iter().map(|f| f.error_code.as_str()).collect();
    assert_eq!(codes, vec!["ALGORITHM_EXECUTION_ERROR", "ALGORITHM_NOT_IMPLEMENTED"]);

    // Every span is closed even though two algorithms blew up
    assert_eq!(tracer.open_spans(), 0);
    let sort_span = tracer.find("sort_Panicking Sort").unwrap();
    assert_eq!(sort_span.status, SpanStatus::Error);
    assert_eq!(sort_span.attribute("success"), Some(&Value::Bool(false)));
}

#[test]
fn test_failed_iteration_yields_no_partial_result() {
    let tracer = InMemoryTracer::new();
    let runner = BenchmarkRunner::new(Some(Arc::new(tracer.clone())));

    assert!(runner.run_algorithm(&Broken, &[1, 2, 3], 4).is_err());

    // The first iteration fails, so no second iteration is attempted
    assert!(tracer.find("iteration_1").is_some());
    assert!(tracer.find("iteration_2").is_none());
    let iteration = tracer.find("iteration_1").unwrap();
    assert_eq!(iteration.status, SpanStatus::Error);
    let benchmark = tracer.find("benchmark_Broken Sort").unwrap();
    assert_eq!(benchmark.status, SpanStatus::Error);
    assert!(benchmark.ended);
}

#[test]
fn test_context_reports_last_stats() {
    let mut context = SortContext::new();
    context.set_strategy(&Algorithm::Insertion);

    let execution = context.execute_strategy(&[3, 2, 1]).unwrap();
    let stats = context.last_stats().unwrap();

    assert_eq!(stats, execution.stats);
    assert_eq!(stats.comparisons, 3);
    assert_eq!(stats.swaps, 5);
}

#[test]
fn test_dataset_to_report_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dataset::generate_dataset_file(dir.path(), 300, -500, 500, Some(1)).unwrap();

    let algorithms: Vec<Algorithm> = Algorithm::ALL.to_vec();
    let strategies: Vec<&dyn SortStrategy> =
        algorithms.iter().map(|a| a as &dyn SortStrategy).collect();

    let runner = BenchmarkRunner::new(None);
    let comparison = runner.run_dataset_file(&data_file, &strategies, 2).unwrap();

    assert_eq!(comparison.array_length, 300);
    assert_eq!(comparison.results.len(), 11);
    assert!(comparison.failures.is_empty());
    assert!(comparison.results.iter().all(|r| r.is_sorted));

    let results_file = report::save_results(dir.path(), &comparison).unwrap();
    let saved = report::load_results(&results_file).unwrap();
    assert_eq!(saved.len(), 11);
    assert_eq!(saved[0].algorithm_name, comparison.fastest().unwrap().algorithm_name);

    let table = report::render_comparison(&comparison);
    for algorithm in Algorithm::ALL {
        assert!(table.contains(algorithm.name()), "{} missing from table", algorithm);
    }
}

#[test]
fn test_malformed_dataset_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "1\n2\nthree\n").unwrap();

    let runner = BenchmarkRunner::new(None);
    let algorithms: [&dyn SortStrategy; 1] = [&Algorithm::Heap];
    let err = runner.run_dataset_file(&path, &algorithms, 1).unwrap_err();

    assert!(matches!(err, AppError::Dataset(_)));
}
