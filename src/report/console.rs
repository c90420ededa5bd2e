//! Console comparison table

use std::fmt::Write;

use crate::benchmark::PerformanceComparison;
use crate::models::Comparison;

const NAME_WIDTH: usize = 22;
const COLUMN_WIDTH: usize = 15;

/// Render a ranked comparison as a fixed-width table.
/// Failed algorithms are listed underneath.
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "===== ALGORITHM COMPARISON ({} elements) =====",
        comparison.array_length
    );
    let _ = writeln!(
        out,
        "{:<nw$}{:<cw$}{:<cw$}{:<cw$}{:<cw$}{:<cw$}{:<cw$}{}",
        "Algorithm",
        "Time (ms)",
        "Comparisons",
        "Swaps",
        "Sorted",
        "vs fastest",
        "Δcmp",
        "Δswaps",
        nw = NAME_WIDTH,
        cw = COLUMN_WIDTH,
    );
    let _ = writeln!(out, "{}", "-".repeat(NAME_WIDTH + COLUMN_WIDTH * 7));

    for result in &comparison.results {
        let relative = match comparison.fastest() {
            Some(fastest) => PerformanceComparison::compare(fastest, result),
            None => continue,
        };

        let _ = writeln!(
            out,
            "{:<nw$}{:<cw$}{:<cw$}{:<cw$}{:<cw$}{:<cw$}{:<cw$}{}",
            result.algorithm_name,
            format!("{:.2}", result.stats.execution_time_ms),
            format!("{:.0}", result.stats.comparisons),
            format!("{:.0}", result.stats.swaps),
            if result.is_sorted { "yes" } else { "NO" },
            format!("{:.2}x", relative.time_ratio),
            format!("{:+.1}%", relative.comparisons_diff_percent),
            format!("{:+.1}%", relative.swaps_diff_percent),
            nw = NAME_WIDTH,
            cw = COLUMN_WIDTH,
        );
    }

    if !comparison.failures.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Failed:");
        for failure in &comparison.failures {
            let _ = writeln!(
                out,
                "  {} [{}]: {}",
                failure.algorithm_name, failure.error_code, failure.message
            );
        }
    }

    out
}

/// Format a duration in milliseconds for humans
pub fn format_milliseconds(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.3}ms", ms)
    } else if ms < 1000.0 {
        format!("{:.2}ms", ms)
    } else if ms < 60_000.0 {
        format!("{:.2}s", ms / 1000.0)
    } else {
        let seconds = (ms / 1000.0) as u64;
        format!("{}m {}s", seconds / 60, seconds % 60)
    }
}
