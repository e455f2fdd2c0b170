//! Service layer error types
//!
//! The uniform failure type threaded through every operation. Expected and
//! unexpected failures share this one propagation path; the API layer turns
//! it into the in-band `{code, message}` envelope entry.

use reanvue_common::AppError;
use reanvue_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation (validation, authorization, conflicts)
    Domain(DomainError),

    /// Application/infrastructure error
    App(AppError),

    /// No session where one is required
    Unauthenticated,

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Unauthenticated => write!(f, "not authenticated"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an error from a cache/session-store failure
    pub fn cache(err: impl fmt::Display) -> Self {
        Self::App(AppError::Cache(err.to_string()))
    }

    /// Get the numeric status code placed in the response envelope
    pub fn status(&self) -> u16 {
        match self {
            Self::Domain(e) => e.status(),
            Self::App(e) => e.status(),
            Self::Unauthenticated => 401,
            Self::Internal(_) => 500,
        }
    }

    /// Whether the failure is server-side and its detail must not leak
    pub fn is_internal(&self) -> bool {
        self.status() >= 500
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
