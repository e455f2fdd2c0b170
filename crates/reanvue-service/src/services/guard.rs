//! Ban/block guard
//!
//! Pre-checks that run before a gated operation's body. A failed check
//! short-circuits via `?` and surfaces as an in-band 401/403 envelope entry;
//! the server process is never affected.
//!
//! The session travels as the raw cookie value and is resolved here, so a
//! session-store failure takes the same error path as everything else.

use tracing::instrument;
use uuid::Uuid;

use reanvue_core::DomainError;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// The authenticated session, resolved from the cookie and passed explicitly
/// into operation bodies rather than read from ambient request state.
#[derive(Debug, Clone)]
pub struct SessionActor {
    /// Opaque session id from the cookie
    pub session_id: String,
    /// User the session is bound to
    pub user_id: Uuid,
}

impl SessionActor {
    pub fn new(session_id: String, user_id: Uuid) -> Self {
        Self {
            session_id,
            user_id,
        }
    }
}

/// Guard service consulting the session, ban, and block stores
pub struct GuardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuardService<'a> {
    /// Create a new GuardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve a session cookie to its actor. An absent cookie or an
    /// expired/unknown session id both resolve to `None`.
    #[instrument(skip_all)]
    pub async fn resolve_session(
        &self,
        cookie: Option<&str>,
    ) -> ServiceResult<Option<SessionActor>> {
        let Some(session_id) = cookie else {
            return Ok(None);
        };

        let data = self
            .ctx
            .session_store()
            .get(session_id)
            .await
            .map_err(ServiceError::cache)?;

        Ok(data.map(|d| SessionActor::new(session_id.to_string(), d.user_id)))
    }

    /// Fail when the user has an active ban.
    #[instrument(skip(self))]
    pub async fn require_not_banned(&self, user_id: Uuid) -> ServiceResult<()> {
        if self.ctx.ban_repo().is_banned(user_id).await? {
            return Err(DomainError::Banned.into());
        }
        Ok(())
    }

    /// If-authenticated variant: a no-op without a session, otherwise the
    /// mandatory ban check. Returns the resolved session for the body.
    #[instrument(skip_all)]
    pub async fn check_bans_if_authed(
        &self,
        cookie: Option<&str>,
    ) -> ServiceResult<Option<SessionActor>> {
        let session = self.resolve_session(cookie).await?;
        if let Some(actor) = &session {
            self.require_not_banned(actor.user_id).await?;
        }
        Ok(session)
    }

    /// Mandatory variant: fails for unauthenticated callers, then runs the
    /// ban check. Returns the acting session for the operation body.
    #[instrument(skip_all)]
    pub async fn require_unbanned_actor(
        &self,
        cookie: Option<&str>,
    ) -> ServiceResult<SessionActor> {
        let actor = self
            .resolve_session(cookie)
            .await?
            .ok_or(ServiceError::Unauthenticated)?;
        self.require_not_banned(actor.user_id).await?;
        Ok(actor)
    }

    /// Fail when a block exists between the two users in either direction.
    #[instrument(skip(self))]
    pub async fn require_not_blocked(&self, a: Uuid, b: Uuid) -> ServiceResult<()> {
        if self.ctx.block_repo().exists_between(a, b).await? {
            return Err(DomainError::Blocked.into());
        }
        Ok(())
    }
}
