//! Shell Sort

use super::{Operations, SortStrategy};
use crate::constants::algorithms;
use crate::error::AppResult;

/// Gapped insertion sort with gaps n/2, n/4, ..., 1
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSort;

impl SortStrategy for ShellSort {
    fn name(&self) -> &'static str {
        algorithms::SHELL
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let mut result = input.to_vec();
        let n = result.len();

        let mut gap = n / 2;
        while gap > 0 {
            for i in gap..n {
                let key = result[i];
                let mut slot = i;

                while slot >= gap {
                    if ops.compare(result[slot - gap], key).is_gt() {
                        result[slot] = result[slot - gap];
                        ops.record_move();
                        slot -= gap;
                    } else {
                        break;
                    }
                }

                if slot != i {
                    result[slot] = key;
                    ops.record_move();
                }
            }
            gap /= 2;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        // gap 2: (3 vs 1) shift + place; (4 vs 2) shift + place
        // gap 1: [1,2,3,4] -> 3 comparisons, no moves
        let output = ShellSort.sort(&[3, 4, 1, 2]).unwrap();
        assert_eq!(output.sorted, vec![1, 2, 3, 4]);
        assert_eq!(output.counts.comparisons, 5);
        assert_eq!(output.counts.swaps, 4);
    }

    #[test]
    fn test_negatives_and_duplicates() {
        let output = ShellSort.sort(&[0, -1, 7, -1, 3, 0]).unwrap();
        assert_eq!(output.sorted, vec![-1, -1, 0, 0, 3, 7]);
    }
}
