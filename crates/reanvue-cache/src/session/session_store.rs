//! Cookie session storage in Redis.
//!
//! Maps the opaque session id carried by the cookie to the authenticated
//! user, with automatic expiration. Sessions are created at login and
//! registration and destroyed at logout.

use crate::pool::{RedisPool, RedisResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Key prefix for sessions
const SESSION_PREFIX: &str = "session:";

/// Default session TTL (7 days)
const DEFAULT_SESSION_TTL: u64 = 7 * 24 * 60 * 60;

/// Stored session data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// User this session belongs to
    pub user_id: Uuid,
    /// Session creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl SessionData {
    /// Create new session data for a user
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Session store backing the `reanvue.qid` cookie
#[derive(Clone)]
pub struct SessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl SessionStore {
    /// Create a new session store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_SESSION_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for a session id
    fn key(session_id: &str) -> String {
        format!("{SESSION_PREFIX}{session_id}")
    }

    /// Create a new session bound to a user, returning the opaque session id
    pub async fn create(&self, user_id: Uuid) -> RedisResult<String> {
        let session_id = Uuid::new_v4().to_string();
        let data = SessionData::new(user_id);

        self.pool
            .set(&Self::key(&session_id), &data, Some(self.ttl_seconds))
            .await?;

        tracing::debug!(user_id = %user_id, "Session created");

        Ok(session_id)
    }

    /// Look up a session by its id
    pub async fn get(&self, session_id: &str) -> RedisResult<Option<SessionData>> {
        self.pool.get_value(&Self::key(session_id)).await
    }

    /// Destroy a session. Returns false when it did not exist.
    pub async fn destroy(&self, session_id: &str) -> RedisResult<bool> {
        let deleted = self.pool.delete(&Self::key(session_id)).await?;

        if deleted {
            tracing::debug!(session_id = %session_id, "Session destroyed");
        }

        Ok(deleted)
    }

    /// Extend a session's TTL (rolling expiration)
    pub async fn touch(&self, session_id: &str) -> RedisResult<bool> {
        self.pool.expire(&Self::key(session_id), self.ttl_seconds).await
    }
}
