//! Custom error types and handling
//!
//! This module defines the error kinds raised by the sorting engine, the
//! benchmark orchestrator and the dataset/report collaborators around it.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Strategy errors
    #[error("Algorithm not implemented: {0}")]
    AlgorithmNotImplemented(String),

    #[error("No sorting strategy configured")]
    NoStrategyConfigured,

    #[error("Algorithm {algorithm} failed: {message}")]
    AlgorithmExecution { algorithm: String, message: String },

    // Validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Dataset errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    // External resource errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlgorithmNotImplemented(_) => "ALGORITHM_NOT_IMPLEMENTED",
            Self::NoStrategyConfigured => "NO_STRATEGY_CONFIGURED",
            Self::AlgorithmExecution { .. } => "ALGORITHM_EXECUTION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Dataset(_) => "DATASET_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Shorthand for a failure raised from inside a sorting algorithm
    pub fn execution(algorithm: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AlgorithmExecution {
            algorithm: algorithm.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from a sorting algorithm itself, as opposed to
    /// the harness around it
    pub fn is_algorithm_failure(&self) -> bool {
        matches!(
            self,
            Self::AlgorithmNotImplemented(_) | Self::AlgorithmExecution { .. }
        )
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
