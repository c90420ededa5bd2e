//! Output validation

/// Whether `values` is in non-decreasing order
pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[1] >= pair[0])
}
