//! Block handlers

use axum::{
    extract::{Path, State},
    Json,
};

use reanvue_service::{BlockInput, BlockService};

use crate::extractors::SessionCookie;
use crate::response::UserResponse;
use crate::state::AppState;

/// Block a user
///
/// POST /blocks
pub async fn block_user(
    State(state): State<AppState>,
    session: SessionCookie,
    Json(input): Json<BlockInput>,
) -> Json<UserResponse> {
    let service = BlockService::new(state.service_context());
    Json(UserResponse::from_result(
        service.block_user(session.value(), &input.user_id).await,
    ))
}

/// Remove a block
///
/// DELETE /blocks/{user_id}
pub async fn unblock_user(
    State(state): State<AppState>,
    session: SessionCookie,
    Path(user_id): Path<String>,
) -> Json<UserResponse> {
    let service = BlockService::new(state.service_context());
    Json(UserResponse::from_result(
        service.unblock_user(session.value(), &user_id).await,
    ))
}
