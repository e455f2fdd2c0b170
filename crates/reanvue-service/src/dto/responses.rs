//! Response DTOs
//!
//! Serialized camelCase, matching what the web client renders. The password
//! hash never appears here; only the repository layer sees it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use reanvue_core::entities::{DirectMessage, Role, User};

/// User as exposed to callers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub avatar: String,
    pub description: String,
    pub status: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            avatar: user.avatar.clone(),
            description: user.description.clone(),
            status: user.status.clone(),
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Direct message as exposed to callers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectMessageDto {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&DirectMessage> for DirectMessageDto {
    fn from(message: &DirectMessage) -> Self {
        Self {
            id: message.id.to_string(),
            sender_id: message.sender_id.to_string(),
            recipient_id: message.recipient_id.to_string(),
            content: message.content.clone(),
            created_at: message.created_at,
        }
    }
}

impl From<DirectMessage> for DirectMessageDto {
    fn from(message: DirectMessage) -> Self {
        Self::from(&message)
    }
}
