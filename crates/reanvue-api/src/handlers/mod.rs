//! Request handlers, one per query/mutation

pub mod account;
pub mod blocks;
pub mod follows;
pub mod health;
pub mod messages;
pub mod moderation;
pub mod users;
