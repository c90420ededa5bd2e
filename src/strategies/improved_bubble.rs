//! Bubble Sort with early termination

use super::{Operations, SortStrategy};
use crate::constants::algorithms;
use crate::error::AppResult;

/// Bubble sort that stops after the first pass without a swap
#[derive(Debug, Clone, Copy, Default)]
pub struct ImprovedBubbleSort;

impl SortStrategy for ImprovedBubbleSort {
    fn name(&self) -> &'static str {
        algorithms::IMPROVED_BUBBLE
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let mut result = input.to_vec();
        let n = result.len();

        for i in 0..n {
            let mut swapped = false;
            for j in 0..n - i - 1 {
                if ops.compare(result[j], result[j + 1]).is_gt() {
                    ops.swap(&mut result, j, j + 1);
                    swapped = true;
                }
            }

            if !swapped {
                break;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pass_on_sorted_input() {
        let output = ImprovedBubbleSort.sort(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(output.counts.comparisons, 4);
        assert_eq!(output.counts.swaps, 0);
    }

    #[test]
    fn test_stops_once_settled() {
        // Pass 1: 3 comparisons, 1 swap. Pass 2: 2 comparisons, no swap.
        let output = ImprovedBubbleSort.sort(&[2, 1, 3, 4]).unwrap();
        assert_eq!(output.sorted, vec![1, 2, 3, 4]);
        assert_eq!(output.counts.comparisons, 5);
        assert_eq!(output.counts.swaps, 1);
    }
}
