//! Counting Sort

use super::{Operations, SortStrategy};
use crate::constants::{algorithms, COUNTING_SORT_MAX_RANGE};
use crate::error::{AppError, AppResult};

/// Stable counting sort over the observed value range.
///
/// Memory grows with `max - min`, not with the input length; ranges wider
/// than [`COUNTING_SORT_MAX_RANGE`] are refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSort;

impl SortStrategy for CountingSort {
    fn name(&self) -> &'static str {
        algorithms::COUNTING
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let (mut min, mut max) = (input[0], input[0]);
        for &value in &input[1..] {
            if ops.compare(value, max).is_gt() {
                max = value;
            }
            if ops.compare(value, min).is_lt() {
                min = value;
            }
        }

        let range = max as i128 - min as i128 + 1;
        if range > COUNTING_SORT_MAX_RANGE as i128 {
            return Err(AppError::execution(
                self.name(),
                format!(
                    "value range {} exceeds the supported maximum of {}",
                    range, COUNTING_SORT_MAX_RANGE
                ),
            ));
        }

        let offset = |value: i64| (value as i128 - min as i128) as usize;

        let mut count = vec![0usize; range as usize];
        for &value in input {
            count[offset(value)] += 1;
        }
        for i in 1..count.len() {
            count[i] += count[i - 1];
        }

        // Walk backwards so equal values keep their relative order
        let mut output = vec![0; input.len()];
        for &value in input.iter().rev() {
            let slot = &mut count[offset(value)];
            *slot -= 1;
            output[*slot] = value;
            ops.record_move();
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let output = CountingSort.sort(&[3, -1, 2, 3]).unwrap();
        assert_eq!(output.sorted, vec![-1, 2, 3, 3]);
        assert_eq!(output.counts.comparisons, 6);
        assert_eq!(output.counts.swaps, 4);
    }

    #[test]
    fn test_single_element_is_still_placed() {
        let output = CountingSort.sort(&[5]).unwrap();
        assert_eq!(output.sorted, vec![5]);
        assert_eq!(output.counts.comparisons, 0);
        assert_eq!(output.counts.swaps, 1);

        let output = CountingSort.sort(&[5, 5]).unwrap();
        assert_eq!(output.counts.comparisons, 2);
        assert_eq!(output.counts.swaps, 2);
    }

    #[test]
    fn test_range_guard() {
        let err = CountingSort.sort(&[i64::MIN, i64::MAX]).unwrap_err();
        assert!(matches!(err, AppError::AlgorithmExecution { ref algorithm, .. } if algorithm == "Counting Sort"));

        let err = CountingSort.sort(&[0, COUNTING_SORT_MAX_RANGE as i64]).unwrap_err();
        assert_eq!(err.error_code(), "ALGORITHM_EXECUTION_ERROR");
    }

    #[test]
    fn test_bucket_array_stays_within_128_mib() {
        let bytes = COUNTING_SORT_MAX_RANGE as usize * std::mem::size_of::<usize>();
        assert!(bytes <= 128 << 20, "{} bytes", bytes);
    }
}
