//! Application services

mod account;
mod block;
mod context;
mod dm;
mod error;
mod follow;
mod guard;
mod moderation;

pub use account::AccountService;
pub use block::BlockService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dm::DmService;
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use guard::{GuardService, SessionActor};
pub use moderation::ModerationService;
