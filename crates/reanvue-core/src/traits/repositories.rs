//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{DirectMessage, User, UserBan, UserBlock, UserFollow};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update a user's mutable profile fields
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Hard delete a user
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;
}

// ============================================================================
// Ban Repository
// ============================================================================

#[async_trait]
pub trait BanRepository: Send + Sync {
    /// Whether a ban row exists for the user
    async fn is_banned(&self, user_id: Uuid) -> RepoResult<bool>;

    /// Find the active ban for a user
    async fn find(&self, user_id: Uuid) -> RepoResult<Option<UserBan>>;

    /// Create or replace the ban for a user
    async fn create(&self, ban: &UserBan) -> RepoResult<()>;

    /// Remove the ban for a user; Ok(false) when none existed
    async fn delete(&self, user_id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Block Repository
// ============================================================================

#[async_trait]
pub trait BlockRepository: Send + Sync {
    /// Whether `blocker` currently blocks `blocked`
    async fn is_blocking(&self, blocker: Uuid, blocked: Uuid) -> RepoResult<bool>;

    /// Whether a block exists between the two users in either direction
    async fn exists_between(&self, a: Uuid, b: Uuid) -> RepoResult<bool>;

    /// Create a block; inserting an existing pair is a no-op
    async fn create(&self, block: &UserBlock) -> RepoResult<()>;

    /// Remove a block; Ok(false) when none existed
    async fn delete(&self, blocker: Uuid, blocked: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Create a follow edge. Duplicate pairs are permitted.
    async fn create(&self, follow: &UserFollow) -> RepoResult<()>;

    /// Delete every edge from `follower` to `followed`, returning the count
    async fn delete_all(&self, follower: Uuid, followed: Uuid) -> RepoResult<u64>;

    /// Users following `user_id`
    async fn followers(&self, user_id: Uuid) -> RepoResult<Vec<User>>;

    /// Users that `user_id` follows
    async fn following(&self, user_id: Uuid) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Direct Message Repository
// ============================================================================

#[async_trait]
pub trait DirectMessageRepository: Send + Sync {
    /// Persist a message
    async fn create(&self, message: &DirectMessage) -> RepoResult<()>;

    /// The most recent messages between two users, oldest first
    async fn conversation(&self, a: Uuid, b: Uuid, limit: i64) -> RepoResult<Vec<DirectMessage>>;
}
