//! Core data types for the QuestWeaver story pipeline.
//!
//! This crate provides the data model shared by every other crate: the task list
//! a user keeps, the narrative settings that flavour generation, the story that
//! comes back, and the provider-neutral request/response types used to talk to
//! language models.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod output;
mod request;
mod role;
mod settings;
mod story;
mod task;
mod telemetry;

pub use message::Message;
pub use output::{GenerateResponse, Output};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError};
pub use role::Role;
pub use settings::{Character, NarrativeStyle, ResolvedSettings, StorySettings, Universe};
pub use story::{GeneratedStory, StoryRequest, TransformedTask};
pub use task::{Difficulty, Task, TaskStatus, TaskType};
pub use telemetry::init_tracing;
