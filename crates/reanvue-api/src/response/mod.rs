//! Response envelopes
//!
//! Every operation answers HTTP 200 with an envelope of shape
//! `{ errors?: [{code, message}], user?/users?/message?/messages? }`.
//! Expected failures appear in-band in `errors`; internal failures are
//! logged server-side and scrubbed to a generic entry so detail never
//! reaches the caller.

use serde::Serialize;
use tracing::error;

use reanvue_core::entities::{DirectMessage, User};
use reanvue_service::{DirectMessageDto, ServiceError, ServiceResult, UserDto};

/// One in-band error entry
#[derive(Debug, Clone, Serialize)]
pub struct QueryError {
    pub code: u16,
    pub message: String,
}

impl QueryError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&ServiceError> for QueryError {
    fn from(err: &ServiceError) -> Self {
        if err.is_internal() {
            // Log the real failure, surface the fixed string
            error!(error = %err, "Internal error");
            Self::new(500, "internal server error")
        } else {
            Self::new(err.status(), err.to_string())
        }
    }
}

/// Envelope carrying a single user
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<QueryError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

impl UserResponse {
    pub fn user(user: &User) -> Self {
        Self {
            errors: None,
            user: Some(UserDto::from(user)),
        }
    }

    /// Neither a user nor an error: an absent result.
    pub fn empty() -> Self {
        Self {
            errors: None,
            user: None,
        }
    }

    pub fn error(err: &ServiceError) -> Self {
        Self {
            errors: Some(vec![QueryError::from(err)]),
            user: None,
        }
    }

    pub fn from_result(result: ServiceResult<User>) -> Self {
        match result {
            Ok(user) => Self::user(&user),
            Err(e) => Self::error(&e),
        }
    }

    pub fn from_optional(result: ServiceResult<Option<User>>) -> Self {
        match result {
            Ok(Some(user)) => Self::user(&user),
            Ok(None) => Self::empty(),
            Err(e) => Self::error(&e),
        }
    }
}

/// Envelope carrying a list of users
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<QueryError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserDto>>,
}

impl UsersResponse {
    pub fn from_result(result: ServiceResult<Vec<User>>) -> Self {
        match result {
            Ok(users) => Self {
                errors: None,
                users: Some(users.iter().map(UserDto::from).collect()),
            },
            Err(e) => Self {
                errors: Some(vec![QueryError::from(&e)]),
                users: None,
            },
        }
    }
}

/// Envelope carrying a single direct message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<QueryError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<DirectMessageDto>,
}

impl MessageResponse {
    pub fn from_result(result: ServiceResult<DirectMessage>) -> Self {
        match result {
            Ok(message) => Self {
                errors: None,
                message: Some(DirectMessageDto::from(&message)),
            },
            Err(e) => Self {
                errors: Some(vec![QueryError::from(&e)]),
                message: None,
            },
        }
    }
}

/// Envelope carrying a list of direct messages
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<QueryError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<DirectMessageDto>>,
}

impl MessagesResponse {
    pub fn from_result(result: ServiceResult<Vec<DirectMessage>>) -> Self {
        match result {
            Ok(messages) => Self {
                errors: None,
                messages: Some(messages.iter().map(DirectMessageDto::from).collect()),
            },
            Err(e) => Self {
                errors: Some(vec![QueryError::from(&e)]),
                messages: None,
            },
        }
    }
}
