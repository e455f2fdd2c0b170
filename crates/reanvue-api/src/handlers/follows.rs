//! Follow handlers

use axum::{
    extract::{Path, State},
    Json,
};

use reanvue_service::{FollowInput, FollowService};

use crate::extractors::SessionCookie;
use crate::response::{UserResponse, UsersResponse};
use crate::state::AppState;

/// Follow a user
///
/// POST /follows
pub async fn follow_user(
    State(state): State<AppState>,
    session: SessionCookie,
    Json(input): Json<FollowInput>,
) -> Json<UserResponse> {
    let service = FollowService::new(state.service_context());
    Json(UserResponse::from_result(
        service.follow_user(session.value(), &input.user_id).await,
    ))
}

/// Unfollow a user (removes every matching edge)
///
/// DELETE /follows/{user_id}
pub async fn unfollow_user(
    State(state): State<AppState>,
    session: SessionCookie,
    Path(user_id): Path<String>,
) -> Json<UserResponse> {
    let service = FollowService::new(state.service_context());
    Json(UserResponse::from_result(
        service.unfollow_user(session.value(), &user_id).await,
    ))
}

/// Users following the subject
///
/// GET /users/{user_id}/followers
pub async fn followers(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<UsersResponse> {
    let service = FollowService::new(state.service_context());
    Json(UsersResponse::from_result(service.followers(&user_id).await))
}

/// Users the subject follows
///
/// GET /users/{user_id}/following
pub async fn following(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<UsersResponse> {
    let service = FollowService::new(state.service_context());
    Json(UsersResponse::from_result(service.following(&user_id).await))
}
