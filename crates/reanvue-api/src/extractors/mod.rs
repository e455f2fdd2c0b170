//! Request extractors

mod session;

pub use session::{clear_session_cookie, session_cookie, SessionCookie, SESSION_COOKIE};
