//! User entity - represents a registered account

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Role;

/// Avatar reference assigned to every new account until one is uploaded.
pub const DEFAULT_AVATAR: &str = "some-cool-avatar-url";

/// User account.
///
/// The password hash is not part of the entity; it lives behind the
/// repository and is only touched by registration and login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
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

impl User {
    /// Create a new User as registration does: the display name starts as
    /// the username, the avatar as the default reference, the role as `user`.
    pub fn new(id: Uuid, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            display_name: username.clone(),
            username,
            email,
            avatar: DEFAULT_AVATAR.to_string(),
            description: String::new(),
            status: String::new(),
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this account holds a staff role.
    #[inline]
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    /// Whether this account strictly outranks `other`.
    #[inline]
    pub fn is_higher_than(&self, other: &User) -> bool {
        self.role.is_higher_than(other.role)
    }

    /// Whether this account may moderate `target` (ban, unban, delete).
    #[inline]
    pub fn can_moderate(&self, target: &User) -> bool {
        self.role.can_moderate(target.role)
    }

    /// Update the display name
    pub fn set_display_name(&mut self, display_name: String) {
        self.display_name = display_name;
        self.updated_at = Utc::now();
    }

    /// Update the avatar reference
    pub fn set_avatar(&mut self, avatar: String) {
        self.avatar = avatar;
        self.updated_at = Utc::now();
    }
}
