//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the benchmark runs.
//! None of it is part of the sorting engine's contract; it only drives the binary.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_DATASET_SIZES, DEFAULT_LOG_FILTER, DEFAULT_MAX_VALUE,
    DEFAULT_MIN_VALUE, DEFAULT_REPEAT_COUNT, DEFAULT_RESULTS_DIR,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub benchmark: BenchmarkConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Benchmark execution configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Dataset sizes to generate and benchmark, in order
    pub dataset_sizes: Vec<usize>,
    /// Number of repetitions per algorithm
    pub repeat_count: u32,
    /// Lower bound (inclusive) of generated values
    pub min_value: i64,
    /// Upper bound (inclusive) of generated values
    pub max_value: i64,
    /// Fixed RNG seed for reproducible datasets
    pub seed: Option<u64>,
    /// Restrict the run to these algorithm names (empty = whole catalogue)
    pub algorithms: Vec<String>,
}

/// File storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub results_dir: PathBuf,
}

/// Logging and instrumentation configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
    /// Attach the tracing-backed instrumentation port to the benchmark
    pub tracing_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Self {
            benchmark: BenchmarkConfig::from_env()?,
            storage: StorageConfig::from_env(),
            logging: LoggingConfig::from_env()?,
        };
        config.validate()?;

        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bench = &self.benchmark;

        if bench.dataset_sizes.is_empty() {
            return Err(ConfigError::InvalidValue("BENCH_DATASET_SIZES".to_string()));
        }
        if bench.repeat_count == 0 {
            return Err(ConfigError::InvalidValue("BENCH_REPEAT_COUNT".to_string()));
        }
        if bench.min_value > bench.max_value {
            return Err(ConfigError::InvalidValue(
                "BENCH_MIN_VALUE > BENCH_MAX_VALUE".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            benchmark: BenchmarkConfig {
                dataset_sizes: DEFAULT_DATASET_SIZES.to_vec(),
                repeat_count: DEFAULT_REPEAT_COUNT,
                min_value: DEFAULT_MIN_VALUE,
                max_value: DEFAULT_MAX_VALUE,
                seed: None,
                algorithms: Vec::new(),
            },
            storage: StorageConfig {
                data_dir: PathBuf::from(DEFAULT_DATA_DIR),
                results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            },
            logging: LoggingConfig {
                rust_log: DEFAULT_LOG_FILTER.to_string(),
                tracing_enabled: true,
            },
        }
    }
}

impl BenchmarkConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            dataset_sizes: match env::var("BENCH_DATASET_SIZES") {
                Ok(raw) => parse_list("BENCH_DATASET_SIZES", &raw)?,
                Err(_) => DEFAULT_DATASET_SIZES.to_vec(),
            },
            repeat_count: parse_or("BENCH_REPEAT_COUNT", env::var("BENCH_REPEAT_COUNT").ok(), DEFAULT_REPEAT_COUNT)?,
            min_value: parse_or("BENCH_MIN_VALUE", env::var("BENCH_MIN_VALUE").ok(), DEFAULT_MIN_VALUE)?,
            max_value: parse_or("BENCH_MAX_VALUE", env::var("BENCH_MAX_VALUE").ok(), DEFAULT_MAX_VALUE)?,
            seed: env::var("BENCH_SEED")
                .ok()
                .map(|raw| {
                    raw.trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("BENCH_SEED".to_string()))
                })
                .transpose()?,
            algorithms: env::var("BENCH_ALGORITHMS")
                .map(|raw| split_names(&raw))
                .unwrap_or_default(),
        })
    }
}

impl StorageConfig {
    fn from_env() -> Self {
        Self {
            data_dir: PathBuf::from(
                env::var("BENCH_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
            ),
            results_dir: PathBuf::from(
                env::var("BENCH_RESULTS_DIR").unwrap_or_else(|_| DEFAULT_RESULTS_DIR.to_string()),
            ),
        }
    }
}

impl LoggingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            tracing_enabled: match env::var("BENCH_TRACING") {
                Ok(raw) => parse_bool("BENCH_TRACING", &raw)?,
                Err(_) => true,
            },
        })
    }
}

/// Parse an optional raw value, falling back to `default` when absent
fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Parse a comma-separated list such as `1000,10000`
fn parse_list<T: FromStr>(key: &str, raw: &str) -> Result<Vec<T>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse()
                .map_err(|_| ConfigError::InvalidValue(key.to_string()))
        })
        .collect()
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(key.to_string())),
    }
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.benchmark.dataset_sizes, vec![1_000, 10_000, 100_000]);
        assert_eq!(config.benchmark.repeat_count, 5);
        assert_eq!(config.benchmark.max_value, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_list() {
        let sizes: Vec<usize> = parse_list("BENCH_DATASET_SIZES", "10, 200,,3000").unwrap();
        assert_eq!(sizes, vec![10, 200, 3000]);

        let bad: Result<Vec<usize>, _> = parse_list("BENCH_DATASET_SIZES", "10,abc");
        assert!(matches!(bad, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or("X", None, 7u32).unwrap(), 7);
        assert_eq!(parse_or("X", Some(" 9 ".to_string()), 7u32).unwrap(), 9);
        assert!(parse_or("X", Some("-1".to_string()), 7u32).is_err());
    }

    #[test]
    fn test_parse_bool_and_names() {
        assert!(parse_bool("BENCH_TRACING", "Yes").unwrap());
        assert!(!parse_bool("BENCH_TRACING", "off").unwrap());
        assert!(parse_bool("BENCH_TRACING", "maybe").is_err());

        assert_eq!(
            split_names("Quick Sort, radix-sort ,"),
            vec!["Quick Sort".to_string(), "radix-sort".to_string()]
        );
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        let mut config = Config::default();
        config.benchmark.min_value = 10;
        config.benchmark.max_value = 5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.benchmark.repeat_count = 0;
        assert!(config.validate().is_err());
    }
}
