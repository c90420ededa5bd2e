//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// BENCHMARK DEFAULTS
// =============================================================================

/// Default dataset sizes generated by the driver
pub const DEFAULT_DATASET_SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Default number of repetitions per algorithm
pub const DEFAULT_REPEAT_COUNT: u32 = 5;

/// Default lower bound (inclusive) of generated values
pub const DEFAULT_MIN_VALUE: i64 = 0;

/// Default upper bound (inclusive) of generated values
pub const DEFAULT_MAX_VALUE: i64 = 10_000;

/// Default directory for generated dataset files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default directory for JSON results
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// ALGORITHM TUNING
// =============================================================================

/// Run length sorted by insertion sort before Tim Sort starts merging
pub const TIM_SORT_RUN: usize = 32;

/// Radix Sort digit base
pub const RADIX_BASE: u64 = 10;

/// Largest value range (max - min + 1) Counting Sort will allocate buckets for.
/// One `usize` bucket per slot, so the cap is 128 MiB on 64-bit targets.
pub const COUNTING_SORT_MAX_RANGE: u64 = 1 << 24;

/// Comparison/swap events are emitted for the first N operations of a call...
pub const EVENT_SAMPLE_HEAD: u64 = 10;

/// ...and then for every Nth operation
pub const EVENT_SAMPLE_EVERY: u64 = 1_000;

// =============================================================================
// ALGORITHM NAMES
// =============================================================================

/// Display names of the catalogue, in benchmark order
pub mod algorithms {
    pub const BUBBLE: &str = "Bubble Sort";
    pub const IMPROVED_BUBBLE: &str = "Improved Bubble Sort";
    pub const INSERTION: &str = "Insertion Sort";
    pub const SELECTION: &str = "Selection Sort";
    pub const QUICK: &str = "Quick Sort";
    pub const MERGE: &str = "Merge Sort";
    pub const HEAP: &str = "Heap Sort";
    pub const TIM: &str = "Tim Sort";
    pub const SHELL: &str = "Shell Sort";
    pub const COUNTING: &str = "Counting Sort";
    pub const RADIX: &str = "Radix Sort";

    /// All algorithm names
    pub const ALL: &[&str] = &[
        BUBBLE,
        IMPROVED_BUBBLE,
        INSERTION,
        SELECTION,
        QUICK,
        MERGE,
        HEAP,
        TIM,
        SHELL,
        COUNTING,
        RADIX,
    ];
}

// =============================================================================
// TELEMETRY
// =============================================================================

/// Span names (prefixes are completed with the algorithm name or iteration)
pub mod spans {
    pub const MAIN_EXECUTION: &str = "main_execution";
    pub const PROCESS_DATASET: &str = "process_dataset";
    pub const BENCHMARK_PREFIX: &str = "benchmark_";
    pub const ITERATION_PREFIX: &str = "iteration_";
    pub const SORT_PREFIX: &str = "sort_";
}

/// Span attribute keys
pub mod attributes {
    pub const ALGORITHM_NAME: &str = "algorithm.name";
    pub const ARRAY_LENGTH: &str = "array.length";
    pub const OPERATION_TYPE: &str = "operation.type";
    pub const EXECUTION_TIME_MS: &str = "execution.time_ms";
    pub const COMPARISONS: &str = "operation.comparisons";
    pub const SWAPS: &str = "operation.swaps";
    pub const AVG_EXECUTION_TIME_MS: &str = "avg_execution.time_ms";
    pub const AVG_COMPARISONS: &str = "avg_operation.comparisons";
    pub const AVG_SWAPS: &str = "avg_operation.swaps";
    pub const REPEAT_COUNT: &str = "repeat_count";
    pub const ITERATION: &str = "iteration";
    pub const TOTAL_ITERATIONS: &str = "total_iterations";
    pub const SUCCESS: &str = "success";
    pub const DATA_FILE: &str = "data_file";
    pub const FASTEST_ALGORITHM: &str = "fastest_algorithm";
    pub const SLOWEST_ALGORITHM: &str = "slowest_algorithm";
    pub const IS_SORTED: &str = "is_sorted";
    pub const DATASET_SIZES: &str = "dataset_sizes";
    pub const RESULT_FILE: &str = "result_file";
    pub const SIZE: &str = "size";
}

/// Values of the `operation.type` attribute
pub mod operation_types {
    pub const SORTING: &str = "sorting";
    pub const BENCHMARK: &str = "benchmark";
    pub const SORTING_ITERATION: &str = "sorting_iteration";
    pub const DATASET_PROCESSING: &str = "dataset_processing";
    pub const MAIN_PROGRAM: &str = "main_program";
}

/// Span event names
pub mod events {
    pub const SORT_STARTED: &str = "sort_started";
    pub const SORT_COMPLETED: &str = "sort_completed";
    pub const COMPARISON: &str = "comparison";
    pub const SWAP: &str = "swap";
    pub const PROGRESS: &str = "progress";
    pub const DATA_LOADED: &str = "data_loaded";
    pub const ALGORITHM_COMPLETED: &str = "algorithm_completed";
    pub const ALGORITHM_ERROR: &str = "algorithm_error";
    pub const GENERATING_DATASET: &str = "generating_dataset";
    pub const DATASET_GENERATED: &str = "dataset_generated";
    pub const DATASET_PROCESSED: &str = "dataset_processed";
    pub const RESULTS_SAVED: &str = "results_saved";
}
