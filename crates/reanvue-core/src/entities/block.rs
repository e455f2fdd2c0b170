//! Block entity - one user refusing interaction with another

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Directed block. A block in either direction between two users prevents
/// them from interacting (follows, direct messages).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBlock {
    /// The user who blocked
    pub user_id: Uuid,
    /// The user being blocked
    pub blocked_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl UserBlock {
    pub fn new(user_id: Uuid, blocked_id: Uuid) -> Self {
        Self {
            user_id,
            blocked_id,
            created_at: Utc::now(),
        }
    }
}
