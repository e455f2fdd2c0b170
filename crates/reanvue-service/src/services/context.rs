//! Service context - dependency container for services
//!
//! Holds the repositories, the session store, and the pools needed by the
//! services. Built once at startup and shared behind the application state.

use std::sync::Arc;

use reanvue_cache::{RedisPool, SessionStore};
use reanvue_core::traits::{
    BanRepository, BlockRepository, DirectMessageRepository, FollowRepository, UserRepository,
};
use reanvue_db::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: RedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    ban_repo: Arc<dyn BanRepository>,
    block_repo: Arc<dyn BlockRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    dm_repo: Arc<dyn DirectMessageRepository>,

    // Session store
    session_store: SessionStore,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        redis_pool: RedisPool,
        user_repo: Arc<dyn UserRepository>,
        ban_repo: Arc<dyn BanRepository>,
        block_repo: Arc<dyn BlockRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        dm_repo: Arc<dyn DirectMessageRepository>,
        session_store: SessionStore,
    ) -> Self {
        Self {
            pool,
            redis_pool,
            user_repo,
            ban_repo,
            block_repo,
            follow_repo,
            dm_repo,
            session_store,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the ban repository
    pub fn ban_repo(&self) -> &dyn BanRepository {
        self.ban_repo.as_ref()
    }

    /// Get the block repository
    pub fn block_repo(&self) -> &dyn BlockRepository {
        self.block_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the direct message repository
    pub fn dm_repo(&self) -> &dyn DirectMessageRepository {
        self.dm_repo.as_ref()
    }

    /// Get the session store
    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"RedisPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<RedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    ban_repo: Option<Arc<dyn BanRepository>>,
    block_repo: Option<Arc<dyn BlockRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    dm_repo: Option<Arc<dyn DirectMessageRepository>>,
    session_store: Option<SessionStore>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: RedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn ban_repo(mut self, repo: Arc<dyn BanRepository>) -> Self {
        self.ban_repo = Some(repo);
        self
    }

    pub fn block_repo(mut self, repo: Arc<dyn BlockRepository>) -> Self {
        self.block_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn dm_repo(mut self, repo: Arc<dyn DirectMessageRepository>) -> Self {
        self.dm_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: SessionStore) -> Self {
        self.session_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::internal("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| ServiceError::internal("redis_pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::internal("user_repo is required"))?,
            self.ban_repo
                .ok_or_else(|| ServiceError::internal("ban_repo is required"))?,
            self.block_repo
                .ok_or_else(|| ServiceError::internal("block_repo is required"))?,
            self.follow_repo
                .ok_or_else(|| ServiceError::internal("follow_repo is required"))?,
            self.dm_repo
                .ok_or_else(|| ServiceError::internal("dm_repo is required"))?,
            self.session_store
                .ok_or_else(|| ServiceError::internal("session_store is required"))?,
        ))
    }
}
