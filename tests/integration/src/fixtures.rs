//! Test fixtures and data generators
//!
//! Request bodies and envelope shapes for deserializing responses.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data (process-unique and run-unique)
pub fn unique_suffix() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as u64)
        .unwrap_or(0);
    let count = COUNTER.fetch_add(1, Ordering::SeqCst);
    nanos * 10_000 + count
}

/// Registration request body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterBody {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl RegisterBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            password: "correct-horse".to_string(),
            email: format!("test{suffix}@example.com"),
        }
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

impl LoginBody {
    pub fn from_register(reg: &RegisterBody) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// One in-band error entry
#[derive(Debug, Deserialize)]
pub struct ErrorEntry {
    pub code: u16,
    pub message: String,
}

/// User payload inside an envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub id: String,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub avatar: String,
    pub description: String,
    pub status: String,
    pub role: String,
}

/// `{ errors?, user? }` envelope
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub errors: Option<Vec<ErrorEntry>>,
    pub user: Option<UserBody>,
}

impl UserEnvelope {
    /// The single error entry, panicking when the envelope succeeded
    pub fn error(&self) -> &ErrorEntry {
        &self.errors.as_ref().expect("expected errors")[0]
    }

    /// The user payload, panicking when the envelope failed
    pub fn expect_user(&self) -> &UserBody {
        assert!(self.errors.is_none(), "unexpected errors: {:?}", self.errors);
        self.user.as_ref().expect("expected user")
    }
}

/// `{ errors?, users? }` envelope
#[derive(Debug, Deserialize)]
pub struct UsersEnvelope {
    pub errors: Option<Vec<ErrorEntry>>,
    pub users: Option<Vec<UserBody>>,
}

/// Direct message payload inside an envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub content: String,
}

/// `{ errors?, message? }` envelope
#[derive(Debug, Deserialize)]
pub struct MessageEnvelope {
    pub errors: Option<Vec<ErrorEntry>>,
    pub message: Option<MessageBody>,
}

/// `{ errors?, messages? }` envelope
#[derive(Debug, Deserialize)]
pub struct MessagesEnvelope {
    pub errors: Option<Vec<ErrorEntry>>,
    pub messages: Option<Vec<MessageBody>>,
}
