//! # copilot-server
//!
//! HTTP boundary and CLI for the support copilot.
//!
//! ## Modules
//!
//! - [`cli`] – clap parser (`serve`, `enable`, `disable`, `status`, `generate`, `seed`)
//! - [`commands`] – handlers for each CLI command
//! - [`config`] – ServerConfig loaded from env
//! - [`error`] – AppError and its HTTP mapping
//! - [`routes`] – axum router
//! - [`state`] – AppState shared by routes

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

#[cfg(test)]
mod config_test;

pub use cli::{Cli, Commands};
pub use config::ServerConfig;
pub use error::{AppError, AppResult};
pub use routes::router;
pub use state::AppState;
