//! Tim Sort (simplified: fixed runs, no galloping)

use super::insertion::insertion_sort;
use super::merge::merge_into;
use super::{Operations, SortStrategy};
use crate::constants::{algorithms, TIM_SORT_RUN};
use crate::error::AppResult;

/// Insertion-sorts fixed runs of [`TIM_SORT_RUN`] elements, then merges
/// them bottom-up with doubling widths.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimSort;

impl SortStrategy for TimSort {
    fn name(&self) -> &'static str {
        algorithms::TIM
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let mut result = input.to_vec();
        let n = result.len();

        for run in result.chunks_mut(TIM_SORT_RUN) {
            insertion_sort(run, ops);
        }

        let mut size = TIM_SORT_RUN;
        while size < n {
            let mut left = 0;
            while left < n {
                let mid = (left + size).min(n);
                let right = (left + 2 * size).min(n);

                if mid < right {
                    let first = result[left..mid].to_vec();
                    let second = result[mid..right].to_vec();
                    merge_into(&first, &second, &mut result[left..right], ops);
                }

                left += 2 * size;
            }
            size *= 2;
        }

        Ok(result)
    }
}
