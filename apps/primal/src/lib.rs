//! # primal
//!
//! CLI and HTTP surfaces over `primal-core`.
//!
//! - `api` - axum router, handlers and JSON types
//! - `cli` - clap commands and their text/JSON output
//! - `config` - TOML configuration with environment overrides

pub mod api;
pub mod cli;
pub mod config;
