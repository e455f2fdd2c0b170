//! Request DTOs for the API operations
//!
//! Field names follow the wire format of the web client (camelCase).
//! Validation happens inside the services so every failure travels the
//! in-band error path, not the transport layer.

use serde::Deserialize;

// ============================================================================
// Account Inputs
// ============================================================================

/// Registration input: username, password, and email
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Login input: username and password
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Partial profile update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

// ============================================================================
// Moderation / Relationship Inputs
// ============================================================================

/// Ban input: target user and an optional reason
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanInput {
    pub user_id: String,
    pub reason: Option<String>,
}

/// Block input: target user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInput {
    pub user_id: String,
}

/// Follow input: target user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowInput {
    pub user_id: String,
}

// ============================================================================
// Direct Message Inputs
// ============================================================================

/// Send a direct message to another user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageInput {
    pub recipient_id: String,
    pub content: String,
}
