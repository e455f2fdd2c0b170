//! PostgreSQL implementation of BanRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use reanvue_core::entities::UserBan;
use reanvue_core::traits::{BanRepository, RepoResult};

use crate::models::BanModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BanRepository
#[derive(Clone)]
pub struct PgBanRepository {
    pool: PgPool,
}

impl PgBanRepository {
    /// Create a new PgBanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BanRepository for PgBanRepository {
    #[instrument(skip(self))]
    async fn is_banned(&self, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM user_bans WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find(&self, user_id: Uuid) -> RepoResult<Option<UserBan>> {
        let result = sqlx::query_as::<_, BanModel>(
            r"
            SELECT user_id, banned_by, reason, created_at
            FROM user_bans
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserBan::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, ban: &UserBan) -> RepoResult<()> {
        // Re-banning replaces the reason and issuing moderator
        sqlx::query(
            r"
            INSERT INTO user_bans (user_id, banned_by, reason, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET reason = $3, banned_by = $2
            ",
        )
        .bind(ban.user_id)
        .bind(ban.banned_by)
        .bind(&ban.reason)
        .bind(ban.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM user_bans WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
