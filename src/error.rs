//! Error types for the listing watcher.
//!
//! This module provides structured error handling with:
//! - `AppError`: Domain-specific errors for a single watch run
//! - `Result<T>`: Type alias for Results using AppError

use thiserror::Error;

// ============================================================================
// DOMAIN ERROR TYPE
// ============================================================================

/// Domain-specific errors for a watch run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Reading or writing the state file failed
    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    /// State could not be encoded or decoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an HTTP status error
    pub fn http_status(status: reqwest::StatusCode, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status: status.as_u16(),
            url: url.into(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
