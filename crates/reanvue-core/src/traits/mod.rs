//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BanRepository, BlockRepository, DirectMessageRepository, FollowRepository, RepoResult,
    UserRepository,
};
