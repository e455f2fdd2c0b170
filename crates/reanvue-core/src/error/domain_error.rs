//! Domain errors - error types for the domain layer
//!
//! Every expected failure of an operation is one of these variants. The
//! `Display` string is the exact message surfaced to the caller, and
//! `status()` is the numeric code placed next to it in the response
//! envelope.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation / lookup errors (400)
    // =========================================================================
    #[error("user doesn't exist")]
    UserNotFound,

    #[error("username doesn't exist")]
    UsernameNotFound,

    #[error("username length must be greater than 2")]
    UsernameTooShort,

    #[error("password length must be greater than 2")]
    PasswordTooShort,

    #[error("invalid email")]
    InvalidEmail,

    #[error("invalid user id")]
    InvalidUserId,

    #[error("you cannot block yourself")]
    CannotBlockSelf,

    #[error("you cannot follow yourself")]
    CannotFollowSelf,

    #[error("user isn't banned")]
    NotBanned,

    #[error("user isn't blocked")]
    NotBlocked,

    #[error("you aren't following this user")]
    NotFollowing,

    #[error("message must not be empty")]
    EmptyMessage,

    #[error("message length must not exceed {max}")]
    MessageTooLong { max: usize },

    // =========================================================================
    // Authentication errors (401)
    // =========================================================================
    #[error("incorrect password")]
    IncorrectPassword,

    // =========================================================================
    // Authorization errors (403)
    // =========================================================================
    #[error("forbidden")]
    Forbidden,

    #[error("you are banned")]
    Banned,

    #[error("you cannot interact with this user")]
    Blocked,

    // =========================================================================
    // Conflict errors (409)
    // =========================================================================
    #[error("username already taken")]
    UsernameTaken,

    #[error("email already taken")]
    EmailTaken,

    // =========================================================================
    // Infrastructure errors (wrapped, 500)
    // =========================================================================
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Numeric status code placed in the response envelope.
    pub fn status(&self) -> u16 {
        match self {
            Self::UserNotFound
            | Self::UsernameNotFound
            | Self::UsernameTooShort
            | Self::PasswordTooShort
            | Self::InvalidEmail
            | Self::InvalidUserId
            | Self::CannotBlockSelf
            | Self::CannotFollowSelf
            | Self::NotBanned
            | Self::NotBlocked
            | Self::NotFollowing
            | Self::EmptyMessage
            | Self::MessageTooLong { .. } => 400,

            Self::IncorrectPassword => 401,

            Self::Forbidden | Self::Banned | Self::Blocked => 403,

            Self::UsernameTaken | Self::EmailTaken => 409,

            Self::DatabaseError(_) | Self::InternalError(_) => 500,
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.status() == 400
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        self.status() == 403
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        self.status() == 409
    }

    /// Check if this is an internal/infrastructure error
    pub fn is_internal(&self) -> bool {
        self.status() == 500
    }
}
