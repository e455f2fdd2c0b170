//! Block service
//!
//! Per-user blocks. Any authenticated, unbanned user may block any other
//! user; a block in either direction stops follows and direct messages.

use tracing::{info, instrument};
use uuid::Uuid;

use reanvue_core::entities::{User, UserBlock};
use reanvue_core::DomainError;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::guard::GuardService;

/// Block service
pub struct BlockService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlockService<'a> {
    /// Create a new BlockService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn guard(&self) -> GuardService<'_> {
        GuardService::new(self.ctx)
    }

    async fn load_target(&self, target_id: &str) -> ServiceResult<User> {
        let target_id: Uuid = target_id.parse().map_err(|_| DomainError::InvalidUserId)?;

        Ok(self
            .ctx
            .user_repo()
            .find_by_id(target_id)
            .await?
            .ok_or(DomainError::UserNotFound)?)
    }

    /// Block a user. Blocking an already-blocked user is a no-op.
    #[instrument(skip(self, cookie))]
    pub async fn block_user(
        &self,
        cookie: Option<&str>,
        target_id: &str,
    ) -> ServiceResult<User> {
        let session = self.guard().require_unbanned_actor(cookie).await?;

        let target = self.load_target(target_id).await?;

        if target.id == session.user_id {
            return Err(DomainError::CannotBlockSelf.into());
        }

        let block = UserBlock::new(session.user_id, target.id);
        self.ctx.block_repo().create(&block).await?;

        info!(blocker = %session.user_id, blocked = %target.id, "User blocked");

        Ok(target)
    }

    /// Remove a block.
    #[instrument(skip(self, cookie))]
    pub async fn unblock_user(
        &self,
        cookie: Option<&str>,
        target_id: &str,
    ) -> ServiceResult<User> {
        let session = self.guard().require_unbanned_actor(cookie).await?;

        let target = self.load_target(target_id).await?;

        if !self
            .ctx
            .block_repo()
            .delete(session.user_id, target.id)
            .await?
        {
            return Err(DomainError::NotBlocked.into());
        }

        info!(blocker = %session.user_id, unblocked = %target.id, "User unblocked");

        Ok(target)
    }
}
