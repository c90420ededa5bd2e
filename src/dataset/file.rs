//! Newline-delimited dataset files

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

use super::generator::{generate_random_data, generate_seeded_data};

/// Write one integer per line
pub fn write_dataset(path: &Path, values: &[i64]) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(path, contents)?;

    Ok(())
}

/// Read a dataset file. Blank lines are skipped; anything else must be an integer.
pub fn read_dataset(path: &Path) -> AppResult<Vec<i64>> {
    let contents = fs::read_to_string(path)?;
    parse_dataset(&contents)
}

pub fn parse_dataset(contents: &str) -> AppResult<Vec<i64>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.trim().parse::<i64>().map_err(|e| {
                AppError::Dataset(format!("line {}: invalid integer {:?}: {}", index + 1, line.trim(), e))
            })
        })
        .collect()
}

/// Path of the generated dataset for `size` inside `dir`
pub fn dataset_path(dir: &Path, size: usize) -> PathBuf {
    dir.join(format!("data_{}.txt", size))
}

/// Generate a random dataset and write it to `dir/data_{size}.txt`
pub fn generate_dataset_file(
    dir: &Path,
    size: usize,
    min: i64,
    max: i64,
    seed: Option<u64>,
) -> AppResult<PathBuf> {
    let values = match seed {
        Some(seed) => generate_seeded_data(size, min, max, seed)?,
        None => generate_random_data(size, min, max)?,
    };

    let path = dataset_path(dir, size);
    write_dataset(&path, &values)?;
    tracing::info!("Generated {} values in [{}, {}] at {}", size, min, max, path.display());

    Ok(path)
}
