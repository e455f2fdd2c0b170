//! Follow entity - directed follower edge between two users

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Directed follow edge. Only the surrogate id is unique; the same pair may
/// appear more than once, and unfollow removes every matching edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFollow {
    pub id: Uuid,
    /// The follower
    pub user_id: Uuid,
    /// The user being followed
    pub followed_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl UserFollow {
    pub fn new(id: Uuid, user_id: Uuid, followed_id: Uuid) -> Self {
        Self {
            id,
            user_id,
            followed_id,
            created_at: Utc::now(),
        }
    }
}
