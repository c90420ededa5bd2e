//! Benchmark result models

use serde::{Deserialize, Serialize};

use super::RunStats;
use crate::error::AppError;

/// One repetition of an algorithm over a dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRun {
    /// Iteration number (1-indexed)
    pub iteration: u32,
    /// Wall clock time in milliseconds
    pub execution_time_ms: f64,
    pub comparisons: u64,
    pub swaps: u64,
}

impl BenchmarkRun {
    pub fn from_stats(iteration: u32, stats: &RunStats) -> Self {
        Self {
            iteration,
            execution_time_ms: stats.execution_time_ms,
            comparisons: stats.comparisons,
            swaps: stats.swaps,
        }
    }
}

/// Statistics aggregated across all repetitions of one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedStats {
    /// Mean execution time (milliseconds)
    #[serde(rename = "executionTime")]
    pub execution_time_ms: f64,
    /// Mean comparisons per run
    pub comparisons: f64,
    /// Mean swaps per run
    pub swaps: f64,
    pub array_length: usize,

    // Spread of the time samples (milliseconds)
    #[serde(rename = "minTime")]
    pub min_time_ms: f64,
    #[serde(rename = "maxTime")]
    pub max_time_ms: f64,
    #[serde(rename = "stddevTime")]
    pub stddev_time_ms: f64,
}

impl AggregatedStats {
    /// Aggregate a set of runs, `None` when there is nothing to aggregate
    pub fn from_runs(runs: &[BenchmarkRun], array_length: usize) -> Option<Self> {
        if runs.is_empty() {
            return None;
        }

        let count = runs.len() as f64;

        // Calculate means
        let execution_time_ms = runs.iter().map(|r| r.execution_time_ms).sum::<f64>() / count;
        let comparisons = runs.iter().map(|r| r.comparisons as f64).sum::<f64>() / count;
        let swaps = runs.iter().map(|r| r.swaps as f64).sum::<f64>() / count;

        // Calculate time spread
        let min_time_ms = runs
            .iter()
            .map(|r| r.execution_time_ms)
            .fold(f64::INFINITY, f64::min);
        let max_time_ms = runs
            .iter()
            .map(|r| r.execution_time_ms)
            .fold(f64::NEG_INFINITY, f64::max);
        let variance = runs
            .iter()
            .map(|r| (r.execution_time_ms - execution_time_ms).powi(2))
            .sum::<f64>()
            / count;

        Some(Self {
            execution_time_ms,
            comparisons,
            swaps,
            array_length,
            min_time_ms,
            max_time_ms,
            stddev_time_ms: variance.sqrt(),
        })
    }
}

/// Final, validated result for one (algorithm, dataset) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub algorithm_name: String,
    pub stats: AggregatedStats,
    /// Whether the output of the last repetition was non-decreasing
    pub is_sorted: bool,
    /// Number of repetitions that contributed to `stats`
    pub iterations: u32,
}

/// An algorithm that failed and contributed no result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmFailure {
    pub algorithm_name: String,
    pub error_code: String,
    pub message: String,
}

impl AlgorithmFailure {
    pub fn from_error(algorithm_name: &str, error: &AppError) -> Self {
        Self {
            algorithm_name: algorithm_name.to_string(),
            error_code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

/// Outcome of running a set of algorithms over one dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub array_length: usize,
    /// Successful results, ranked by ascending mean execution time
    pub results: Vec<BenchmarkResult>,
    pub failures: Vec<AlgorithmFailure>,
}

impl Comparison {
    pub fn fastest(&self) -> Option<&BenchmarkResult> {
        self.results.first()
    }

    pub fn slowest(&self) -> Option<&BenchmarkResult> {
        self.results.last()
    }

    /// Order results by ascending mean execution time
    pub fn rank(&mut self) {
        self.results
            .sort_by(|a, b| a.stats.execution_time_ms.total_cmp(&b.stats.execution_time_ms));
    }
}
