//! Bubble Sort

use super::{Operations, SortStrategy};
use crate::constants::{algorithms, events};
use crate::error::AppResult;
use crate::telemetry::KeyValue;

/// Classic bubble sort: always runs every pass, even on sorted input
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        algorithms::BUBBLE
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let mut result = input.to_vec();
        let n = result.len();
        let progress_every = (n / 10).max(1);

        for i in 0..n {
            for j in 0..n - i - 1 {
                if ops.compare(result[j], result[j + 1]).is_gt() {
                    ops.swap(&mut result, j, j + 1);
                }
            }

            // Every ~10% of the passes, plus the first few
            if ops.is_traced() && (i % progress_every == 0 || i < 5) {
                ops.event(
                    events::PROGRESS,
                    &[
                        KeyValue::new("completed_iterations", i + 1),
                        KeyValue::new("total_iterations", n),
                        KeyValue::new("progress_percent", (i + 1) as f64 / n as f64 * 100.0),
                    ],
                );
            }
        }

        Ok(result)
    }
}
