//! PostgreSQL implementation of BlockRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use reanvue_core::entities::UserBlock;
use reanvue_core::traits::{BlockRepository, RepoResult};

use super::error::map_db_error;

/// PostgreSQL implementation of BlockRepository
#[derive(Clone)]
pub struct PgBlockRepository {
    pool: PgPool,
}

impl PgBlockRepository {
    /// Create a new PgBlockRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlockRepository for PgBlockRepository {
    #[instrument(skip(self))]
    async fn is_blocking(&self, blocker: Uuid, blocked: Uuid) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM user_blocks WHERE user_id = $1 AND blocked_id = $2)",
        )
        .bind(blocker)
        .bind(blocked)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn exists_between(&self, a: Uuid, b: Uuid) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM user_blocks
                WHERE (user_id = $1 AND blocked_id = $2)
                   OR (user_id = $2 AND blocked_id = $1)
            )
            ",
        )
        .bind(a)
        .bind(b)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, block: &UserBlock) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_blocks (user_id, blocked_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, blocked_id) DO NOTHING
            ",
        )
        .bind(block.user_id)
        .bind(block.blocked_id)
        .bind(block.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, blocker: Uuid, blocked: Uuid) -> RepoResult<bool> {
        let result =
            sqlx::query("DELETE FROM user_blocks WHERE user_id = $1 AND blocked_id = $2")
                .bind(blocker)
                .bind(blocked)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
