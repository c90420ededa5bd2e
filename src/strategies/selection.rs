//! Selection Sort

use super::{Operations, SortStrategy};
use crate::constants::algorithms;
use crate::error::AppResult;

/// Repeated minimum search with a single swap per position
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortStrategy for SelectionSort {
    fn name(&self) -> &'static str {
        algorithms::SELECTION
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let mut result = input.to_vec();
        let n = result.len();

        for i in 0..n.saturating_sub(1) {
            let mut min_index = i;

            for j in i + 1..n {
                if ops.compare(result[j], result[min_index]).is_lt() {
                    min_index = j;
                }
            }

            if min_index != i {
                ops.swap(&mut result, i, min_index);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let output = SelectionSort.sort(&[3, 1, 2]).unwrap();
        assert_eq!(output.sorted, vec![1, 2, 3]);
        assert_eq!(output.counts.comparisons, 3);
        assert_eq!(output.counts.swaps, 2);
    }

    #[test]
    fn test_swaps_bounded_by_n_minus_one() {
        let data: Vec<i64> = (0..50).rev().chain(0..50).collect();
        let output = SelectionSort.sort(&data).unwrap();
        assert!(output.counts.swaps <= data.len() as u64 - 1);
        assert_eq!(output.counts.comparisons, 100 * 99 / 2);
    }
}
