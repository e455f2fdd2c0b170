//! Route definitions
//!
//! One route per query/mutation, mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{account, blocks, follows, health, messages, moderation, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(account_routes())
        .merge(user_routes())
        .merge(moderation_routes())
        .merge(relationship_routes())
        .merge(message_routes())
}

/// Account routes
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/account/register", post(account::register))
        .route("/account/login", post(account::login))
        .route("/account/logout", post(account::logout))
        .route("/account/me", get(account::me))
        .route("/account", patch(account::update_user))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", delete(users::delete_user))
        .route("/users/:user_id/followers", get(follows::followers))
        .route("/users/:user_id/following", get(follows::following))
}

/// Moderation routes
fn moderation_routes() -> Router<AppState> {
    Router::new()
        .route("/bans", post(moderation::ban_user))
        .route("/bans/:user_id", delete(moderation::unban_user))
}

/// Block and follow routes
fn relationship_routes() -> Router<AppState> {
    Router::new()
        .route("/blocks", post(blocks::block_user))
        .route("/blocks/:user_id", delete(blocks::unblock_user))
        .route("/follows", post(follows::follow_user))
        .route("/follows/:user_id", delete(follows::unfollow_user))
}

/// Direct message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", post(messages::send_message))
        .route("/messages/:user_id", get(messages::conversation))
}
