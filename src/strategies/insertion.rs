//! Insertion Sort

use super::{Operations, SortStrategy};
use crate::constants::algorithms;
use crate::error::AppResult;

/// Shift-based insertion sort
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortStrategy for InsertionSort {
    fn name(&self) -> &'static str {
        algorithms::INSERTION
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let mut result = input.to_vec();
        insertion_sort(&mut result, ops);
        Ok(result)
    }
}

/// Sort `v` in place by insertion.
///
/// One comparison per shift test, one swap per shift, and one more swap when
/// the key lands somewhere other than where it started.
pub(super) fn insertion_sort(v: &mut [i64], ops: &mut Operations<'_>) {
    for i in 1..v.len() {
        let key = v[i];
        let mut slot = i;

        while slot > 0 {
            if ops.compare(v[slot - 1], key).is_gt() {
                v[slot] = v[slot - 1];
                ops.record_move();
                slot -= 1;
            } else {
                break;
            }
        }

        v[slot] = key;
        if slot != i {
            ops.record_move();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_reverse_input() {
        // Key 2: 1 cmp, 1 shift, 1 placement. Key 1: 2 cmp, 2 shifts, 1 placement.
        let output = InsertionSort.sort(&[3, 2, 1]).unwrap();
        assert_eq!(output.sorted, vec![1, 2, 3]);
        assert_eq!(output.counts.comparisons, 3);
        assert_eq!(output.counts.swaps, 5);
    }

    #[test]
    fn test_sorted_input_is_linear() {
        let output = InsertionSort.sort(&[1, 2, 3, 4]).unwrap();
        assert_eq!(output.counts.comparisons, 3);
        assert_eq!(output.counts.swaps, 0);
    }
}
