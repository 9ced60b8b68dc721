//! Crate error type
//!
//! Conversions never fail; these cover the stdio adapter and configuration.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum LandError {
    #[error("Invalid form JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown trigger '{0}' (expected ropani, bigha, area or market_rate)")]
    UnknownTrigger(String),
}

/// Result type for adapter operations
pub type LandResult<T> = Result<T, LandError>;
