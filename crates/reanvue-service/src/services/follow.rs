//! Follow service
//!
//! Directed follow edges between users. The edge table has no uniqueness
//! beyond its surrogate key, so following twice produces two edges and
//! unfollow removes them all.

use tracing::{info, instrument};
use uuid::Uuid;

use reanvue_core::entities::{User, UserFollow};
use reanvue_core::DomainError;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::guard::GuardService;

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
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

    /// Follow a user. Blocked pairs cannot follow in either direction.
    #[instrument(skip(self, cookie))]
    pub async fn follow_user(
        &self,
        cookie: Option<&str>,
        target_id: &str,
    ) -> ServiceResult<User> {
        let session = self.guard().require_unbanned_actor(cookie).await?;

        let target = self.load_target(target_id).await?;

        if target.id == session.user_id {
            return Err(DomainError::CannotFollowSelf.into());
        }

        self.guard()
            .require_not_blocked(session.user_id, target.id)
            .await?;

        let follow = UserFollow::new(Uuid::new_v4(), session.user_id, target.id);
        self.ctx.follow_repo().create(&follow).await?;

        info!(follower = %session.user_id, followed = %target.id, "User followed");

        Ok(target)
    }

    /// Unfollow a user, removing every matching edge.
    #[instrument(skip(self, cookie))]
    pub async fn unfollow_user(
        &self,
        cookie: Option<&str>,
        target_id: &str,
    ) -> ServiceResult<User> {
        let session = self.guard().require_unbanned_actor(cookie).await?;

        let target = self.load_target(target_id).await?;

        let removed = self
            .ctx
            .follow_repo()
            .delete_all(session.user_id, target.id)
            .await?;

        if removed == 0 {
            return Err(DomainError::NotFollowing.into());
        }

        info!(follower = %session.user_id, unfollowed = %target.id, removed, "User unfollowed");

        Ok(target)
    }

    /// Users following `user_id`. Public.
    #[instrument(skip(self))]
    pub async fn followers(&self, user_id: &str) -> ServiceResult<Vec<User>> {
        let user_id: Uuid = user_id.parse().map_err(|_| DomainError::InvalidUserId)?;
        Ok(self.ctx.follow_repo().followers(user_id).await?)
    }

    /// Users that `user_id` follows. Public.
    #[instrument(skip(self))]
    pub async fn following(&self, user_id: &str) -> ServiceResult<Vec<User>> {
        let user_id: Uuid = user_id.parse().map_err(|_| DomainError::InvalidUserId)?;
        Ok(self.ctx.follow_repo().following(user_id).await?)
    }
}
