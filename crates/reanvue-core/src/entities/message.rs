//! Direct message entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum direct message length in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// A direct message between two users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMessage {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl DirectMessage {
    pub fn new(id: Uuid, sender_id: Uuid, recipient_id: Uuid, content: String) -> Self {
        Self {
            id,
            sender_id,
            recipient_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Whether `user_id` is one of the two participants.
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.sender_id == user_id || self.recipient_id == user_id
    }
}
