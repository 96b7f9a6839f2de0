//! CLI module
//!
//! Command-line interface for turning order exports into messages.
//!
//! # Commands
//!
//! - `process` - Render a CSV file into an order message
//! - `languages` - List available message languages
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
