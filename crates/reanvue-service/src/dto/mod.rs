//! Request and response DTOs

mod requests;
mod responses;

pub use requests::{
    BanInput, BlockInput, FollowInput, LoginInput, RegisterInput, SendMessageInput,
    UpdateUserInput,
};
pub use responses::{DirectMessageDto, UserDto};
