//! JSON result files

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{AlgorithmFailure, BenchmarkResult, Comparison};

/// Self-describing report of one comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub array_length: usize,
    pub repeat_count: u32,
    pub results: Vec<BenchmarkResult>,
    pub failures: Vec<AlgorithmFailure>,
}

impl BenchmarkReport {
    pub fn new(comparison: &Comparison, repeat_count: u32) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            array_length: comparison.array_length,
            repeat_count,
            results: comparison.results.clone(),
            failures: comparison.failures.clone(),
        }
    }
}

/// Path of the results file for an array length
pub fn results_path(dir: &Path, array_length: usize) -> PathBuf {
    dir.join(format!("results_{}.json", array_length))
}

/// Write the ranked results as a pretty-printed JSON array to
/// `dir/results_{n}.json` and return the path
pub fn save_results(dir: &Path, comparison: &Comparison) -> AppResult<PathBuf> {
    let path = results_path(dir, comparison.array_length);
    write_json(&path, &comparison.results)?;
    tracing::info!("Results saved to {}", path.display());
    Ok(path)
}

/// Write the full report envelope to `dir/report_{n}.json` and return the path
pub fn save_report(dir: &Path, report: &BenchmarkReport) -> AppResult<PathBuf> {
    let path = dir.join(format!("report_{}.json", report.array_length));
    write_json(&path, report)?;
    tracing::info!("Report {} saved to {}", report.run_id, path.display());
    Ok(path)
}

/// Read back a results file
pub fn load_results(path: &Path) -> AppResult<Vec<BenchmarkResult>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
