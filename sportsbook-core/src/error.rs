//! Error types for the simulator

use thiserror::Error;

/// Simulator-wide error type
#[derive(Error, Debug)]
pub enum SportsbookError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl SportsbookError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        SportsbookError::NotFound(msg.into())
    }

    /// The bare message, without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            SportsbookError::NotFound(msg) => msg,
        }
    }
}

/// Result type alias for simulator operations
pub type SportsbookResult<T> = Result<T, SportsbookError>;
