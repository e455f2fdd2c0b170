//! User handlers
//!
//! Public lookup and moderated deletion.

use axum::{
    extract::{Path, State},
    Json,
};

use reanvue_service::AccountService;

use crate::extractors::SessionCookie;
use crate::response::UserResponse;
use crate::state::AppState;

/// Public lookup by id; an absent user yields an empty envelope
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<UserResponse> {
    let service = AccountService::new(state.service_context());
    Json(UserResponse::from_optional(service.get_user(&user_id).await))
}

/// Delete an account: self-service, or staff strictly outranking the target
///
/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    session: SessionCookie,
    Path(user_id): Path<String>,
) -> Json<UserResponse> {
    let service = AccountService::new(state.service_context());
    Json(UserResponse::from_result(
        service.delete_user(session.value(), &user_id).await,
    ))
}
