//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use reanvue_core::entities::{User, UserFollow};
use reanvue_core::traits::{FollowRepository, RepoResult};

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn create(&self, follow: &UserFollow) -> RepoResult<()> {
        // No ON CONFLICT: duplicate follower/followed pairs are permitted
        sqlx::query(
            r"
            INSERT INTO user_follows (id, user_id, followed_id, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(follow.id)
        .bind(follow.user_id)
        .bind(follow.followed_id)
        .bind(follow.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self, follower: Uuid, followed: Uuid) -> RepoResult<u64> {
        let result =
            sqlx::query("DELETE FROM user_follows WHERE user_id = $1 AND followed_id = $2")
                .bind(follower)
                .bind(followed)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn followers(&self, user_id: Uuid) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT DISTINCT u.id, u.username, u.email, u.password_hash, u.display_name,
                   u.avatar, u.description, u.status, u.role, u.created_at, u.updated_at
            FROM users u
            JOIN user_follows f ON f.user_id = u.id
            WHERE f.followed_id = $1
            ORDER BY u.username
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(User::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn following(&self, user_id: Uuid) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT DISTINCT u.id, u.username, u.email, u.password_hash, u.display_name,
                   u.avatar, u.description, u.status, u.role, u.created_at, u.updated_at
            FROM users u
            JOIN user_follows f ON f.followed_id = u.id
            WHERE f.user_id = $1
            ORDER BY u.username
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(User::try_from).collect()
    }
}
