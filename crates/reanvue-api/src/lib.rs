//! # reanvue-api
//!
//! HTTP API server built with Axum: one route per query/mutation, each
//! answering with the in-band response envelope and carrying identity in
//! the `reanvue.qid` session cookie.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
