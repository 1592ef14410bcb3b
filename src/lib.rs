//! Rules engine for two-player naval combat matches.

pub mod cli;
pub mod core;
pub mod domain;
mod engine;
mod engine_api;
mod logging;
pub mod prelude;
pub mod protocol;

pub use crate::core::*;
pub use domain::*;
pub use engine::MatchRegistry;
pub use engine_api::MatchApi;
pub use logging::{init_logging, init_logging_at, LOG_ENV};
pub use protocol::{dispatch, handle_json, Request, Response};
