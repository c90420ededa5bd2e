//! Metrics collection and analysis

use crate::models::{AggregatedStats, BenchmarkResult, BenchmarkRun, RunStats};

/// Collects the runs of one algorithm over one dataset
pub struct MetricsCollector {
    array_length: usize,
    runs: Vec<BenchmarkRun>,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new(array_length: usize) -> Self {
        Self {
            array_length,
            runs: Vec::new(),
        }
    }

    /// Record the statistics of one iteration
    pub fn record(&mut self, iteration: u32, stats: &RunStats) {
        self.runs.push(BenchmarkRun::from_stats(iteration, stats));
    }

    /// Calculate the aggregated statistics
    pub fn aggregate(&self) -> Option<AggregatedStats> {
        AggregatedStats::from_runs(&self.runs, self.array_length)
    }
}

/// Performance of one result relative to a baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceComparison {
    /// How many times slower than the baseline (1.0 = equal)
    pub time_ratio: f64,
    /// Relative difference in mean comparisons, in percent of the baseline
    pub comparisons_diff_percent: f64,
    pub swaps_diff_percent: f64,
}

impl PerformanceComparison {
    /// Compare `result` against `baseline`
    pub fn compare(baseline: &BenchmarkResult, result: &BenchmarkResult) -> Self {
        let base = &baseline.stats;
        let other = &result.stats;

        let time_ratio = if base.execution_time_ms > 0.0 {
            other.execution_time_ms / base.execution_time_ms
        } else {
            1.0
        };

        Self {
            time_ratio,
            comparisons_diff_percent: diff_percent(base.comparisons, other.comparisons),
            swaps_diff_percent: diff_percent(base.swaps, other.swaps),
        }
    }
}

fn diff_percent(base: f64, other: f64) -> f64 {
    if base > 0.0 {
        ((other - base) / base) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(time: f64, comparisons: u64, swaps: u64) -> RunStats {
        RunStats {
            comparisons,
            swaps,
            execution_time_ms: time,
            array_length: 4,
        }
    }

    #[test]
    fn test_collects_and_aggregates() {
        let mut metrics = MetricsCollector::new(4);
        assert!(metrics.aggregate().is_none());

        metrics.record(1, &stats(2.0, 6, 3));
        metrics.record(2, &stats(4.0, 6, 5));

        let aggregated = metrics.aggregate().unwrap();
        assert_eq!(aggregated.execution_time_ms, 3.0);
        assert_eq!(aggregated.swaps, 4.0);
        assert_eq!(aggregated.array_length, 4);
    }

    #[test]
    fn test_performance_comparison() {
        let result = |time: f64, comparisons: u64| {
            let mut metrics = MetricsCollector::new(4);
            metrics.record(1, &stats(time, comparisons, 0));
            BenchmarkResult {
                algorithm_name: "x".to_string(),
                stats: metrics.aggregate().unwrap(),
                is_sorted: true,
                iterations: 1,
            }
        };

        let comparison = PerformanceComparison::compare(&result(2.0, 10), &result(5.0, 15));
        assert_eq!(comparison.time_ratio, 2.5);
        assert_eq!(comparison.comparisons_diff_percent, 50.0);
        assert_eq!(comparison.swaps_diff_percent, 0.0);
    }
}
