//! Moderation service
//!
//! Site-wide bans. Every action shares the one gate: the actor must hold a
//! staff role and strictly outrank the target.

use tracing::{info, instrument};
use uuid::Uuid;

use reanvue_core::entities::{User, UserBan};
use reanvue_core::DomainError;

use crate::dto::BanInput;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::guard::GuardService;

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn guard(&self) -> GuardService<'_> {
        GuardService::new(self.ctx)
    }

    /// Load the actor and the target, enforcing the moderation gate.
    async fn load_actor_and_target(
        &self,
        cookie: Option<&str>,
        target_id: &str,
    ) -> ServiceResult<(User, User)> {
        let session = self.guard().require_unbanned_actor(cookie).await?;

        let actor = self
            .ctx
            .user_repo()
            .find_by_id(session.user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let target_id: Uuid = target_id.parse().map_err(|_| DomainError::InvalidUserId)?;

        let target = self
            .ctx
            .user_repo()
            .find_by_id(target_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if !actor.can_moderate(&target) {
            return Err(DomainError::Forbidden.into());
        }

        Ok((actor, target))
    }

    /// Ban a user. Re-banning updates the reason and issuing moderator.
    #[instrument(skip(self, cookie, input), fields(target = %input.user_id))]
    pub async fn ban_user(
        &self,
        cookie: Option<&str>,
        input: BanInput,
    ) -> ServiceResult<User> {
        let (actor, target) = self.load_actor_and_target(cookie, &input.user_id).await?;

        let ban = UserBan::new(target.id, actor.id, input.reason);
        self.ctx.ban_repo().create(&ban).await?;

        info!(user_id = %target.id, banned_by = %actor.id, "User banned");

        Ok(target)
    }

    /// Lift a user's ban.
    #[instrument(skip(self, cookie))]
    pub async fn unban_user(
        &self,
        cookie: Option<&str>,
        target_id: &str,
    ) -> ServiceResult<User> {
        let (actor, target) = self.load_actor_and_target(cookie, target_id).await?;

        if !self.ctx.ban_repo().delete(target.id).await? {
            return Err(DomainError::NotBanned.into());
        }

        info!(user_id = %target.id, unbanned_by = %actor.id, "User unbanned");

        Ok(target)
    }
}
