//! Error types for the QuestWeaver story pipeline.
//!
//! This crate provides the foundation error types used throughout the QuestWeaver workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The three pipeline failures map onto dedicated types:
//! - [`ConfigurationError`] - bad input the user must correct (no tasks, unknown model, missing key)
//! - [`GenerationError`] - the provider call failed or produced nothing
//! - [`ParseError`] - the model output could not be segmented at all
//!
//! # Examples
//!
//! ```
//! use questweaver_error::{ConfigurationError, ConfigurationErrorKind, QuestweaverResult};
//!
//! fn pick_model(key: &str) -> QuestweaverResult<()> {
//!     Err(ConfigurationError::new(ConfigurationErrorKind::UnknownModel(key.to_string())))?
//! }
//!
//! let err = pick_model("unknown-model").unwrap_err();
//! assert_eq!(err.message(), "Invalid model selected: unknown-model");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod configuration;
mod error;
mod generation;
mod io;
mod json;
mod parse;
mod server;
mod task;

pub use config::ConfigError;
pub use configuration::{ConfigurationError, ConfigurationErrorKind};
pub use error::{QuestweaverError, QuestweaverErrorKind, QuestweaverResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use io::IoError;
pub use json::JsonError;
pub use parse::{ParseError, ParseErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use task::{TaskError, TaskErrorKind};
