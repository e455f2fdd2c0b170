//! Moderation handlers
//!
//! Site-wide bans, gated on the staff-and-outranks rule.

use axum::{
    extract::{Path, State},
    Json,
};

use reanvue_service::{BanInput, ModerationService};

use crate::extractors::SessionCookie;
use crate::response::UserResponse;
use crate::state::AppState;

/// Ban a user
///
/// POST /bans
pub async fn ban_user(
    State(state): State<AppState>,
    session: SessionCookie,
    Json(input): Json<BanInput>,
) -> Json<UserResponse> {
    let service = ModerationService::new(state.service_context());
    Json(UserResponse::from_result(
        service.ban_user(session.value(), input).await,
    ))
}

/// Lift a user's ban
///
/// DELETE /bans/{user_id}
pub async fn unban_user(
    State(state): State<AppState>,
    session: SessionCookie,
    Path(user_id): Path<String>,
) -> Json<UserResponse> {
    let service = ModerationService::new(state.service_context());
    Json(UserResponse::from_result(
        service.unban_user(session.value(), &user_id).await,
    ))
}
