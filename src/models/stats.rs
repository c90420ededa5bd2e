//! Per-call sorting statistics

use serde::{Deserialize, Serialize};

/// Operation counters accumulated during a single `sort` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCounts {
    pub comparisons: u64,
    pub swaps: u64,
}

/// Statistics of one timed strategy execution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStats {
    pub comparisons: u64,
    pub swaps: u64,
    /// Wall clock time of the sort call in milliseconds
    #[serde(rename = "executionTime")]
    pub execution_time_ms: f64,
    pub array_length: usize,
}

impl RunStats {
    pub fn new(counts: OperationCounts, execution_time_ms: f64, array_length: usize) -> Self {
        Self {
            comparisons: counts.comparisons,
            swaps: counts.swaps,
            execution_time_ms,
            array_length,
        }
    }
}

/// Normalized result of `SortContext::execute_strategy`
#[derive(Debug, Clone, PartialEq)]
pub struct SortExecution {
    pub algorithm_name: String,
    pub sorted_array: Vec<i64>,
    pub stats: RunStats,
}
