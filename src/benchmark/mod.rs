//! Benchmark orchestration
//!
//! The [`BenchmarkRunner`] repeats each strategy over a dataset, averages
//! the runs with the [`MetricsCollector`], validates the last output, and
//! ranks the results. A failing strategy never aborts the others.

pub mod metrics;
pub mod runner;
pub mod validation;

pub use metrics::{MetricsCollector, PerformanceComparison};
pub use runner::BenchmarkRunner;
pub use validation::is_sorted;
