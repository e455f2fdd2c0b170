//! Error handling utilities for repositories

use reanvue_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique-constraint violation to a domain error chosen by the
/// violated constraint's name, falling back to a database error otherwise.
///
/// The unique indexes are the backstop for the non-transactional
/// check-then-insert sequences in the service layer.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(&str) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or_default();
            return on_unique(constraint);
        }
    }
    DomainError::DatabaseError(e.to_string())
}
