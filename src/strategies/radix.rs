//! Radix Sort (LSD, base 10)

use super::{Operations, SortStrategy};
use crate::constants::{algorithms, RADIX_BASE};
use crate::error::AppResult;

/// LSD radix sort on magnitudes.
///
/// Negative values are split off, sorted by magnitude, then reversed and
/// negated in front of the non-negative ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadixSort;

impl SortStrategy for RadixSort {
    fn name(&self) -> &'static str {
        algorithms::RADIX
    }

    fn sort_with(&self, input: &[i64], ops: &mut Operations<'_>) -> AppResult<Vec<i64>> {
        let first = match input {
            [] => return Ok(Vec::new()),
            // Nothing to scan, but every digit pass still places the value
            [value] => {
                radix_sort_magnitudes(vec![value.unsigned_abs()], ops);
                return Ok(vec![*value]);
            }
            _ => input[0],
        };

        let mut widest = first.unsigned_abs();
        for value in &input[1..] {
            let magnitude = value.unsigned_abs();
            if ops.compare(magnitude, widest).is_gt() {
                widest = magnitude;
            }
        }
        tracing::trace!(widest, "radix magnitude scan");

        let mut has_negative = false;
        for &value in input {
            if ops.compare(value, 0).is_lt() {
                has_negative = true;
                break;
            }
        }

        if !has_negative {
            let magnitudes = input.iter().map(|v| v.unsigned_abs()).collect();
            return Ok(radix_sort_magnitudes(magnitudes, ops)
                .into_iter()
                .map(|m| m as i64)
                .collect());
        }

        let (negative, positive): (Vec<i64>, Vec<i64>) = input.iter().partition(|v| **v < 0);
        let negative = radix_sort_magnitudes(negative.iter().map(|v| v.unsigned_abs()).collect(), ops);
        let positive = radix_sort_magnitudes(positive.iter().map(|v| v.unsigned_abs()).collect(), ops);

        let mut result = Vec::with_capacity(input.len());
        // Largest magnitude is the most negative value; i128 keeps i64::MIN representable
        result.extend(negative.into_iter().rev().map(|m| -(m as i128) as i64));
        result.extend(positive.into_iter().map(|m| m as i64));
        Ok(result)
    }
}

/// Sort magnitudes with one counting pass per decimal digit of the maximum
fn radix_sort_magnitudes(mut values: Vec<u64>, ops: &mut Operations<'_>) -> Vec<u64> {
    let Some(&first) = values.first() else {
        return values;
    };

    let mut max = first;
    for &value in &values[1..] {
        if ops.compare(value, max).is_gt() {
            max = value;
        }
    }

    let mut exp = 1u64;
    while max / exp > 0 {
        values = counting_pass(&values, exp, ops);
        match exp.checked_mul(RADIX_BASE) {
            Some(next) => exp = next,
            None => break,
        }
    }

    values
}

/// Stable counting sort on the digit selected by `exp`
fn counting_pass(values: &[u64], exp: u64, ops: &mut Operations<'_>) -> Vec<u64> {
    let digit = |v: u64| ((v / exp) % RADIX_BASE) as usize;

    let mut count = [0usize; RADIX_BASE as usize];
    for &value in values {
        count[digit(value)] += 1;
    }
    for i in 1..count.len() {
        count[i] += count[i - 1];
    }

    let mut output = vec![0; values.len()];
    for &value in values.iter().rev() {
        let slot = &mut count[digit(value)];
        *slot -= 1;
        output[*slot] = value;
        ops.record_move();
    }

    output
}
