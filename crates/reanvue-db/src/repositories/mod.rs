//! PostgreSQL repository implementations

mod ban;
mod block;
mod error;
mod follow;
mod message;
mod user;

pub use ban::PgBanRepository;
pub use block::PgBlockRepository;
pub use follow::PgFollowRepository;
pub use message::PgDirectMessageRepository;
pub use user::PgUserRepository;
