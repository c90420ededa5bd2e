//! Heap Sort

use super::{Operations, SortStrategy};
use crate::constants::algorithms;
use crate::error::AppResult;

/// In-place max-heap sort
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl SortStrategy for HeapSort {
    fn name(&self) -> &'static str {
        algorithms::HEAP
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let mut result = input.to_vec();
        let n = result.len();

        for root in (0..n / 2).rev() {
            sift_down(&mut result, n, root, ops);
        }

        for end in (1..n).rev() {
            ops.swap(&mut result, 0, end);
            sift_down(&mut result, end, 0, ops);
        }

        Ok(result)
    }
}

/// Restore the heap property below `root` within `v[..len]`.
/// Each child that exists costs one comparison.
fn sift_down(v: &mut [i64], len: usize, mut root: usize, ops: &mut Operations<'_>) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < len && ops.compare(v[left], v[largest]).is_gt() {
            largest = left;
        }
        if right < len && ops.compare(v[right], v[largest]).is_gt() {
            largest = right;
        }

        if largest == root {
            return;
        }

        ops.swap(v, root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        // Build: root 0 vs children 1 and 2 (2 cmp, already a heap).
        // Extract 3: swap, sift [2,1] (1 cmp, no swap). Extract 2: swap, nothing to sift.
        let output = HeapSort.sort(&[3, 1, 2]).unwrap();
        assert_eq!(output.sorted, vec![1, 2, 3]);
        assert_eq!(output.counts.comparisons, 3);
        assert_eq!(output.counts.swaps, 2);
    }

    #[test]
    fn test_duplicates() {
        let output = HeapSort.sort(&[2, 2, 1, 2, 1]).unwrap();
        assert_eq!(output.sorted, vec![1, 1, 2, 2, 2]);
    }
}
