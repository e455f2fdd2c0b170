//! Application error types
//!
//! Unified error handling above the domain layer: infrastructure and
//! configuration failures wrapping the domain's own error set.

use reanvue_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Database errors
    #[error("database error: {0}")]
    Database(String),

    // Redis errors
    #[error("cache error: {0}")]
    Cache(String),

    // Internal errors
    #[error("internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get the numeric status code for this error
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Database(_) | Self::Cache(_) | Self::Internal(_) | Self::Config(_) => 500,
            Self::Domain(e) => e.status(),
        }
    }

    /// Check if this is a server-side error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status() >= 500
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
