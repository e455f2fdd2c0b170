//! Session cookie extractor
//!
//! Pulls the opaque session id out of the `reanvue.qid` cookie. The value is
//! not resolved here: the services look it up in the session store so that a
//! store failure travels the in-band error path like everything else.

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "reanvue.qid";

/// The raw session cookie value, if the request carried one
#[derive(Debug, Clone)]
pub struct SessionCookie(pub Option<String>);

impl SessionCookie {
    /// Borrow the cookie value for passing into a service
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self(
            jar.get(SESSION_COOKIE).map(|c| c.value().to_string()),
        ))
    }
}

/// Build the session cookie set at registration and login.
pub fn session_cookie(session_id: String, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, session_id);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_secure(secure);
    cookie
}

/// Build the cookie used to clear the session at logout. The name and path
/// must match the original for browsers to drop it.
pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie
}
