//! Account handlers
//!
//! Registration, login, current-user lookup, profile update, and logout.
//! Registration and login bind the session cookie; logout clears it even
//! when the session-store destroy fails.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use reanvue_service::{AccountService, LoginInput, RegisterInput, UpdateUserInput};

use crate::extractors::{clear_session_cookie, session_cookie, SessionCookie};
use crate::response::UserResponse;
use crate::state::AppState;

/// Register a new account
///
/// POST /account/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<RegisterInput>,
) -> (CookieJar, Json<UserResponse>) {
    let service = AccountService::new(state.service_context());

    match service.register(input).await {
        Ok((user, session_id)) => {
            let jar = jar.add(session_cookie(session_id, state.cookie_secure()));
            (jar, Json(UserResponse::user(&user)))
        }
        Err(e) => (jar, Json(UserResponse::error(&e))),
    }
}

/// Login with username and password
///
/// POST /account/login
pub async fn login(
    State(state): State<AppState>,
    session: SessionCookie,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> (CookieJar, Json<UserResponse>) {
    let service = AccountService::new(state.service_context());

    match service.login(session.value(), input).await {
        Ok((user, session_id)) => {
            let jar = jar.add(session_cookie(session_id, state.cookie_secure()));
            (jar, Json(UserResponse::user(&user)))
        }
        Err(e) => (jar, Json(UserResponse::error(&e))),
    }
}

/// The user bound to the current session
///
/// GET /account/me
pub async fn me(State(state): State<AppState>, session: SessionCookie) -> Json<UserResponse> {
    let service = AccountService::new(state.service_context());
    Json(UserResponse::from_optional(
        service.me(session.value()).await,
    ))
}

/// Update the session user's profile
///
/// PATCH /account
pub async fn update_user(
    State(state): State<AppState>,
    session: SessionCookie,
    Json(input): Json<UpdateUserInput>,
) -> Json<UserResponse> {
    let service = AccountService::new(state.service_context());
    Json(UserResponse::from_result(
        service.update_user(session.value(), input).await,
    ))
}

/// Destroy the session and clear its cookie
///
/// POST /account/logout
pub async fn logout(
    State(state): State<AppState>,
    session: SessionCookie,
    jar: CookieJar,
) -> (CookieJar, Json<bool>) {
    let service = AccountService::new(state.service_context());
    let ok = service.logout(session.value()).await;

    // The cookie is cleared even when the destroy failed
    let jar = jar.remove(clear_session_cookie());

    (jar, Json(ok))
}
