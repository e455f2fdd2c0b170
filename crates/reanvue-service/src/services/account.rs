//! Account service
//!
//! Registration, login, session-bound queries, profile updates, deletion,
//! and logout. Validation runs here so that every failure travels the
//! in-band envelope path with the exact codes and messages the client
//! renders.

use tracing::{error, info, instrument, warn};
use uuid::Uuid;
use validator::ValidateEmail;

use reanvue_common::auth::{hash_password, verify_password};
use reanvue_core::entities::User;
use reanvue_core::DomainError;

use crate::dto::{LoginInput, RegisterInput, UpdateUserInput};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guard::GuardService;

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn guard(&self) -> GuardService<'_> {
        GuardService::new(self.ctx)
    }

    /// Register a new account and bind a fresh session to it.
    ///
    /// Returns the created user together with the opaque session id the
    /// caller must place in the cookie.
    ///
    /// The duplicate checks and the insert are separate statements; under a
    /// concurrent registration race the unique indexes win and the insert
    /// reports the same 409 the pre-check would have.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> ServiceResult<(User, String)> {
        let username = input.username.trim().to_string();
        let email = input.email.trim().to_string();

        if self
            .ctx
            .user_repo()
            .find_by_username(&username)
            .await?
            .is_some()
        {
            return Err(DomainError::UsernameTaken.into());
        }

        if self.ctx.user_repo().find_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailTaken.into());
        }

        if username.len() <= 2 {
            return Err(DomainError::UsernameTooShort.into());
        }

        if input.password.len() <= 2 {
            return Err(DomainError::PasswordTooShort.into());
        }

        if !email.validate_email() {
            return Err(DomainError::InvalidEmail.into());
        }

        let password_hash = hash_password(&input.password)?;

        let user = User::new(Uuid::new_v4(), username, email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        let session_id = self
            .ctx
            .session_store()
            .create(user.id)
            .await
            .map_err(ServiceError::cache)?;

        Ok((user, session_id))
    }

    /// Login with username and password, binding a fresh session.
    ///
    /// Runs the if-authenticated ban check against any session the caller
    /// already carries.
    #[instrument(skip(self, cookie, input), fields(username = %input.username))]
    pub async fn login(
        &self,
        cookie: Option<&str>,
        input: LoginInput,
    ) -> ServiceResult<(User, String)> {
        self.guard().check_bans_if_authed(cookie).await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_username(&input.username)
            .await?
            .ok_or(DomainError::UsernameNotFound)?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if !verify_password(&input.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: incorrect password");
            return Err(DomainError::IncorrectPassword.into());
        }

        info!(user_id = %user.id, "User logged in");

        let session_id = self
            .ctx
            .session_store()
            .create(user.id)
            .await
            .map_err(ServiceError::cache)?;

        Ok((user, session_id))
    }

    /// The user bound to the current session, if any.
    #[instrument(skip_all)]
    pub async fn me(&self, cookie: Option<&str>) -> ServiceResult<Option<User>> {
        let session = self.guard().check_bans_if_authed(cookie).await?;

        match session {
            Some(actor) => Ok(self.ctx.user_repo().find_by_id(actor.user_id).await?),
            None => Ok(None),
        }
    }

    /// Public lookup by id. An absent user is not an error.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> ServiceResult<Option<User>> {
        let id: Uuid = id.parse().map_err(|_| DomainError::InvalidUserId)?;
        Ok(self.ctx.user_repo().find_by_id(id).await?)
    }

    /// Partial profile update for the session's user.
    #[instrument(skip_all)]
    pub async fn update_user(
        &self,
        cookie: Option<&str>,
        input: UpdateUserInput,
    ) -> ServiceResult<User> {
        let actor = self.guard().require_unbanned_actor(cookie).await?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(actor.user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if let Some(display_name) = input.display_name {
            user.display_name = display_name;
        }
        if let Some(avatar) = input.avatar {
            user.avatar = avatar;
        }
        if let Some(description) = input.description {
            user.description = description;
        }
        if let Some(status) = input.status {
            user.status = status;
        }

        self.ctx.user_repo().update(&user).await?;

        // Reload so the returned record carries the store's updated_at
        let user = self
            .ctx
            .user_repo()
            .find_by_id(actor.user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        info!(user_id = %user.id, "User profile updated");

        Ok(user)
    }

    /// Delete an account. Self-deletion is unconditional; deleting someone
    /// else requires a staff role that strictly outranks the target.
    #[instrument(skip(self, cookie))]
    pub async fn delete_user(
        &self,
        cookie: Option<&str>,
        target_id: &str,
    ) -> ServiceResult<User> {
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

        if target.id != actor.id && !actor.can_moderate(&target) {
            return Err(DomainError::Forbidden.into());
        }

        self.ctx.user_repo().delete(target.id).await?;

        info!(user_id = %target.id, deleted_by = %actor.id, "User deleted");

        Ok(target)
    }

    /// Destroy the session. Resolves to a success flag, never an error: a
    /// destroy failure is logged and reported as `false`, and the caller
    /// clears the cookie either way.
    #[instrument(skip_all)]
    pub async fn logout(&self, cookie: Option<&str>) -> bool {
        let Some(session_id) = cookie else {
            return true;
        };

        match self.ctx.session_store().destroy(session_id).await {
            Ok(_) => true,
            Err(e) => {
                error!(error = %e, "Failed to destroy session");
                false
            }
        }
    }
}
