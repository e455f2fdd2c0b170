//! Ban entity - a site-wide ban keeping an account out of gated operations

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Site-wide ban. While a ban row exists for a user, every gated operation
/// refuses them. One active ban per user; re-banning replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBan {
    /// The banned user
    pub user_id: Uuid,
    /// The staff member who issued the ban
    pub banned_by: Uuid,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserBan {
    pub fn new(user_id: Uuid, banned_by: Uuid, reason: Option<String>) -> Self {
        Self {
            user_id,
            banned_by,
            reason,
            created_at: Utc::now(),
        }
    }
}
