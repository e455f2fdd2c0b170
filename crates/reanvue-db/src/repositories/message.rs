//! PostgreSQL implementation of DirectMessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use reanvue_core::entities::DirectMessage;
use reanvue_core::traits::{DirectMessageRepository, RepoResult};

use crate::models::DirectMessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of DirectMessageRepository
#[derive(Clone)]
pub struct PgDirectMessageRepository {
    pool: PgPool,
}

impl PgDirectMessageRepository {
    /// Create a new PgDirectMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectMessageRepository for PgDirectMessageRepository {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &DirectMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO direct_messages (id, sender_id, recipient_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(message.id)
        .bind(message.sender_id)
        .bind(message.recipient_id)
        .bind(&message.content)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn conversation(&self, a: Uuid, b: Uuid, limit: i64) -> RepoResult<Vec<DirectMessage>> {
        // Newest `limit` messages between the pair, returned oldest first
        let results = sqlx::query_as::<_, DirectMessageModel>(
            r"
            SELECT id, sender_id, recipient_id, content, created_at
            FROM (
                SELECT id, sender_id, recipient_id, content, created_at
                FROM direct_messages
                WHERE (sender_id = $1 AND recipient_id = $2)
                   OR (sender_id = $2 AND recipient_id = $1)
                ORDER BY created_at DESC
                LIMIT $3
            ) recent
            ORDER BY created_at ASC
            ",
        )
        .bind(a)
        .bind(b)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DirectMessage::from).collect())
    }
}
