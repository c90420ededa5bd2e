//! Random dataset generation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{AppError, AppResult};

/// Generate `size` integers drawn uniformly from `min..=max`
pub fn generate_random_data(size: usize, min: i64, max: i64) -> AppResult<Vec<i64>> {
    generate_with_rng(&mut rand::rng(), size, min, max)
}

/// Same as [`generate_random_data`], reproducible for a given seed
pub fn generate_seeded_data(size: usize, min: i64, max: i64, seed: u64) -> AppResult<Vec<i64>> {
    generate_with_rng(&mut StdRng::seed_from_u64(seed), size, min, max)
}

pub fn generate_with_rng<R: Rng>(
    rng: &mut R,
    size: usize,
    min: i64,
    max: i64,
) -> AppResult<Vec<i64>> {
    if min > max {
        return Err(AppError::InvalidInput(format!(
            "min value {} is greater than max value {}",
            min, max
        )));
    }

    Ok((0..size).map(|_| rng.random_range(min..=max)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_within_bounds() {
        let data = generate_random_data(500, -10, 10).unwrap();
        assert_eq!(data.len(), 500);
        assert!(data.iter().all(|v| (-10..=10).contains(v)));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = generate_seeded_data(100, 0, 1_000, 42).unwrap();
        let b = generate_seeded_data(100, 0, 1_000, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(generate_random_data(3, 7, 7).unwrap(), vec![7, 7, 7]);
        assert!(generate_random_data(3, 8, 7).is_err());
        assert!(generate_random_data(0, 0, 1).unwrap().is_empty());
    }
}
