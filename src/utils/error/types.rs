//! Error types for the calculator application

use crate::core::cost::CostError;
use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tracing subscriber setup errors
    #[error("Logging error: {0}")]
    Logging(String),

    /// Cost calculation errors
    #[error("Cost calculation error: {0}")]
    Cost(#[from] CostError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            _ => 1,
        }
    }
}
