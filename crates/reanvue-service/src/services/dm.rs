//! Direct message service

use tracing::{info, instrument};
use uuid::Uuid;

use reanvue_core::entities::{DirectMessage, User, MAX_MESSAGE_LENGTH};
use reanvue_core::DomainError;

use crate::dto::SendMessageInput;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::guard::GuardService;

/// Default number of messages returned by a conversation query
const DEFAULT_CONVERSATION_LIMIT: i64 = 50;

/// Upper bound on a conversation page
const MAX_CONVERSATION_LIMIT: i64 = 100;

/// Direct message service
pub struct DmService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DmService<'a> {
    /// Create a new DmService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn guard(&self) -> GuardService<'_> {
        GuardService::new(self.ctx)
    }

    async fn load_user(&self, id: &str) -> ServiceResult<User> {
        let id: Uuid = id.parse().map_err(|_| DomainError::InvalidUserId)?;

        Ok(self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound)?)
    }

    /// Send a direct message. Blocked pairs cannot message each other.
    #[instrument(skip(self, cookie, input), fields(recipient = %input.recipient_id))]
    pub async fn send(
        &self,
        cookie: Option<&str>,
        input: SendMessageInput,
    ) -> ServiceResult<DirectMessage> {
        let session = self.guard().require_unbanned_actor(cookie).await?;

        let recipient = self.load_user(&input.recipient_id).await?;

        if input.content.trim().is_empty() {
            return Err(DomainError::EmptyMessage.into());
        }

        if input.content.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(DomainError::MessageTooLong {
                max: MAX_MESSAGE_LENGTH,
            }
            .into());
        }

        self.guard()
            .require_not_blocked(session.user_id, recipient.id)
            .await?;

        let message =
            DirectMessage::new(Uuid::new_v4(), session.user_id, recipient.id, input.content);
        self.ctx.dm_repo().create(&message).await?;

        info!(message_id = %message.id, sender = %session.user_id, recipient = %recipient.id, "Direct message sent");

        Ok(message)
    }

    /// The most recent messages between the session user and `other_id`,
    /// oldest first.
    #[instrument(skip(self, cookie))]
    pub async fn conversation(
        &self,
        cookie: Option<&str>,
        other_id: &str,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<DirectMessage>> {
        let session = self.guard().require_unbanned_actor(cookie).await?;

        let other: Uuid = other_id.parse().map_err(|_| DomainError::InvalidUserId)?;

        let limit = limit
            .unwrap_or(DEFAULT_CONVERSATION_LIMIT)
            .clamp(1, MAX_CONVERSATION_LIMIT);

        Ok(self
            .ctx
            .dm_repo()
            .conversation(session.user_id, other, limit)
            .await?)
    }
}
