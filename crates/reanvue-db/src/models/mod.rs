//! Database models (row structs)
//!
//! Only tables read back as whole rows get a model; the block and follow
//! repositories work through scalar queries.

mod ban;
mod message;
mod user;

pub use ban::BanModel;
pub use message::DirectMessageModel;
pub use user::UserModel;
