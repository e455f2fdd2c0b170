//! Direct message handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use reanvue_service::{DmService, SendMessageInput};

use crate::extractors::SessionCookie;
use crate::response::{MessageResponse, MessagesResponse};
use crate::state::AppState;

/// Query parameters for a conversation page
#[derive(Debug, Deserialize)]
pub struct ConversationQuery {
    pub limit: Option<i64>,
}

/// Send a direct message
///
/// POST /messages
pub async fn send_message(
    State(state): State<AppState>,
    session: SessionCookie,
    Json(input): Json<SendMessageInput>,
) -> Json<MessageResponse> {
    let service = DmService::new(state.service_context());
    Json(MessageResponse::from_result(
        service.send(session.value(), input).await,
    ))
}

/// The conversation between the session user and another user
///
/// GET /messages/{user_id}
pub async fn conversation(
    State(state): State<AppState>,
    session: SessionCookie,
    Path(user_id): Path<String>,
    Query(query): Query<ConversationQuery>,
) -> Json<MessagesResponse> {
    let service = DmService::new(state.service_context());
    Json(MessagesResponse::from_result(
        service
            .conversation(session.value(), &user_id, query.limit)
            .await,
    ))
}
