//! SortBench - Comparative Sorting Benchmark Harness
//!
//! This library runs a fixed catalogue of sorting algorithms against the
//! same integer datasets and compares them by wall-clock time, comparisons
//! and swaps.
//!
//! # Features
//!
//! - Eleven algorithms behind one [`SortStrategy`] contract
//! - Per-call operation counters, never shared between calls
//! - Repeated runs, averaged and validated for sortedness
//! - Per-algorithm failure isolation (errors and panics)
//! - Pluggable instrumentation through the [`telemetry::Tracer`] port
//!
//! # Architecture
//!
//! - **Strategies**: the algorithms and their counters
//! - **Context**: times and instruments a single sort call
//! - **Benchmark**: repeats, aggregates, ranks
//! - **Dataset / Report**: input files and result output

pub mod benchmark;
pub mod config;
pub mod constants;
pub mod context;
pub mod dataset;
pub mod error;
pub mod models;
pub mod report;
pub mod strategies;
pub mod telemetry;

// Re-export commonly used types
pub use benchmark::BenchmarkRunner;
pub use config::Config;
pub use context::SortContext;
pub use error::{AppError, AppResult};
pub use models::{BenchmarkResult, Comparison, RunStats, SortExecution};
pub use strategies::{Algorithm, SortOutput, SortStrategy};
