//! Merge Sort (top-down)

use super::{Operations, SortStrategy};
use crate::constants::algorithms;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortStrategy for MergeSort {
    fn name(&self) -> &'static str {
        algorithms::MERGE
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        Ok(merge_sort(input, ops))
    }
}

fn merge_sort(v: &[i64], ops: &mut Operations<'_>) -> Vec<i64> {
    if v.len() <= 1 {
        return v.to_vec();
    }

    let (left, right) = v.split_at(v.len() / 2);
    let left = merge_sort(left, ops);
    let right = merge_sort(right, ops);

    let mut merged = vec![0; v.len()];
    merge_into(&left, &right, &mut merged, ops);
    merged
}

/// Merge two sorted runs into `out`, which must hold exactly
/// `left.len() + right.len()` elements.
///
/// One comparison per head-to-head test and one swap credit per element
/// placed, leftovers included. Ties take the left element first.
pub(super) fn merge_into(left: &[i64], right: &[i64], out: &mut [i64], ops: &mut Operations<'_>) {
    debug_assert_eq!(out.len(), left.len() + right.len());

    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = if i < left.len() && j < right.len() {
            ops.compare(left[i], right[j]).is_le()
        } else {
            i < left.len()
        };

        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
        ops.record_move();
    }
}
