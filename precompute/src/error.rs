//! Error handling for the crop ranking precompute job

use shared::{CatalogError, ScenarioError};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Crop catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Scenario(#[from] ScenarioError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Stable error code for log lines
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            AppError::Catalog(_) => "CATALOG_ERROR",
            AppError::Scenario(_) => "INVALID_SCENARIO",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Result type alias for services
pub type AppResult<T> = Result<T, AppError>;
