//! Quick Sort (Lomuto partition, last element as pivot)

use super::{Operations, SortStrategy};
use crate::constants::algorithms;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        algorithms::QUICK
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let mut result = input.to_vec();
        quick_sort(&mut result, ops);
        Ok(result)
    }
}

/// Recurse into the smaller partition, loop on the larger one.
fn quick_sort(mut v: &mut [i64], ops: &mut Operations<'_>) {
    while v.len() > 1 {
        let pivot = partition(v, ops);
        let (left, rest) = std::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left, ops);
            v = right;
        } else {
            quick_sort(right, ops);
            v = left;
        }
    }
}

/// Partition around the last element and return its final index
fn partition(v: &mut [i64], ops: &mut Operations<'_>) -> usize {
    let high = v.len() - 1;
    let pivot = v[high];
    // Next slot for an element <= pivot
    let mut store = 0;

    for j in 0..high {
        if ops.compare(v[j], pivot).is_le() {
            if store != j {
                ops.swap(v, store, j);
            }
            store += 1;
        }
    }

    if store != high {
        ops.swap(v, store, high);
    }

    store
}
