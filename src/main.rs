//! SortBench - Application Entry Point
//!
//! Generates one dataset per configured size, benchmarks the selected
//! algorithms against it, prints the comparison and saves the results.

use std::sync::Arc;
use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sortbench::{
    benchmark::BenchmarkRunner,
    config::CONFIG,
    constants::{attributes, events, operation_types, spans},
    dataset,
    report::{self, BenchmarkReport},
    strategies::{Algorithm, SortStrategy},
    telemetry::{end_span_ok, record_error_to_span, KeyValue, Span, Tracer, TracingTracer},
};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.logging.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SortBench...");

    let algorithms = Algorithm::select(&CONFIG.benchmark.algorithms)?;
    tracing::info!(
        "Benchmarking {} algorithms on sizes {:?}, {} repetitions each",
        algorithms.len(),
        CONFIG.benchmark.dataset_sizes,
        CONFIG.benchmark.repeat_count
    );

    let tracer: Option<Arc<dyn Tracer>> = if CONFIG.logging.tracing_enabled {
        Some(Arc::new(TracingTracer::new()))
    } else {
        None
    };

    let mut span = tracer.as_ref().map(|tracer| {
        tracer.start_span(
            spans::MAIN_EXECUTION,
            &[
                KeyValue::new(attributes::OPERATION_TYPE, operation_types::MAIN_PROGRAM),
                KeyValue::new(attributes::DATASET_SIZES, format!("{:?}", CONFIG.benchmark.dataset_sizes)),
                KeyValue::new(attributes::REPEAT_COUNT, CONFIG.benchmark.repeat_count),
            ],
        )
    });

    let started = Instant::now();
    let runner = BenchmarkRunner::new(tracer.clone());

    match run(&runner, &algorithms, &mut span) {
        Ok(()) => {
            if let Some(span) = span.as_deref_mut() {
                end_span_ok(span, &[]);
            }
        }
        Err(e) => {
            tracing::error!("Benchmark run failed: {}", e);
            if let Some(span) = span.as_deref_mut() {
                record_error_to_span(span, &e);
            }
            return Err(e.into());
        }
    }

    tracing::info!(
        "All benchmarks completed in {}",
        report::format_milliseconds(started.elapsed().as_secs_f64() * 1000.0)
    );

    Ok(())
}

fn run(
    runner: &BenchmarkRunner,
    algorithms: &[Algorithm],
    span: &mut Option<Box<dyn Span>>,
) -> sortbench::AppResult<()> {
    let bench = &CONFIG.benchmark;
    let storage = &CONFIG.storage;
    let strategies: Vec<&dyn SortStrategy> = algorithms
        .iter()
        .map(|algorithm| algorithm as &dyn SortStrategy)
        .collect();

    for &size in &bench.dataset_sizes {
        if let Some(span) = span.as_deref_mut() {
            span.add_event(events::GENERATING_DATASET, &[KeyValue::new(attributes::SIZE, size)]);
        }

        let data_file = dataset::generate_dataset_file(
            &storage.data_dir,
            size,
            bench.min_value,
            bench.max_value,
            bench.seed,
        )?;

        if let Some(span) = span.as_deref_mut() {
            span.add_event(
                events::DATASET_GENERATED,
                &[
                    KeyValue::new(attributes::SIZE, size),
                    KeyValue::new(attributes::DATA_FILE, data_file.display().to_string()),
                ],
            );
        }

        let comparison = runner.run_dataset_file(&data_file, &strategies, bench.repeat_count)?;
        println!("\n{}", report::render_comparison(&comparison));

        let results_file = report::save_results(&storage.results_dir, &comparison)?;
        report::save_report(
            &storage.results_dir,
            &BenchmarkReport::new(&comparison, bench.repeat_count),
        )?;

        if let Some(span) = span.as_deref_mut() {
            span.add_event(
                events::RESULTS_SAVED,
                &[
                    KeyValue::new(attributes::RESULT_FILE, results_file.display().to_string()),
                    KeyValue::new(attributes::SIZE, size),
                ],
            );
            span.add_event(events::DATASET_PROCESSED, &[KeyValue::new(attributes::SIZE, size)]);
        }
    }

    Ok(())
}
