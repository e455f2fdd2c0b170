//! Entity ↔ model mappers

mod ban;
mod message;
mod user;
