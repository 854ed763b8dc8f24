//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the questweaver binary.

mod commands;
mod handlers;

pub use commands::{Cli, Commands, OutputFormat};
pub use handlers::{generate, list_models, parse_response, print_prompt, serve_api};
