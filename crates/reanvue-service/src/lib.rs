//! # reanvue-service
//!
//! Application layer: request/response DTOs, the ban/block guard, and the
//! services implementing every account, moderation, block, follow, and
//! direct-message operation over a `ServiceContext` dependency container.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    BanInput, BlockInput, DirectMessageDto, FollowInput, LoginInput, RegisterInput,
    SendMessageInput, UpdateUserInput, UserDto,
};
pub use services::{
    AccountService, BlockService, DmService, FollowService, GuardService, ModerationService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SessionActor,
};
