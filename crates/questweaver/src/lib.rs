//! QuestWeaver - turn a task list into a story
//!
//! QuestWeaver retells a to-do list as an anime-style narrative: every active
//! task becomes a chapter with its own quest name, prose and victory
//! conditions. A story is produced in four steps:
//!
//! 1. **Prompt Builder** renders tasks and narrative settings into one prompt
//! 2. **Model Invoker** sends it to the configured provider (OpenAI, Gemini or
//!    Anthropic)
//! 3. **Response Parser** recovers title, opening, chapters and epilogue from
//!    the loosely formatted reply
//! 4. **Result Assembler** pairs chapters with tasks by position
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use questweaver::{
//!     Character, Difficulty, NarrativeStyle, QuestweaverConfig, StoryPipeline, StoryRequest,
//!     StorySettings, Task, TaskType, Universe,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = StoryPipeline::from_config(QuestweaverConfig::load()?);
//!
//! let request = StoryRequest::new(
//!     vec![Task::new("Clean desk", TaskType::Daily, Difficulty::Normal)],
//!     StorySettings::new(
//!         Universe::BattleAnime,
//!         Character::DeterminedUnderdog,
//!         NarrativeStyle::EpicShonen,
//!     ),
//! );
//!
//! let story = pipeline.generate(&request).await?;
//! println!("{}", story.title);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `questweaver_error` - Error types
//! - `questweaver_core` - Tasks, settings, stories and generic requests
//! - `questweaver_interface` - `StoryDriver` trait and `Provider` enum
//! - `questweaver_models` - Provider clients, configuration and the invoker
//! - `questweaver_narrative` - Prompt, parser, assembler, pipeline and state
//! - `questweaver_server` - HTTP API
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod files;
mod render;

pub use files::{read_settings, read_tasks, read_text};
pub use render::render_story;

pub use questweaver_core::*;
pub use questweaver_error::*;
pub use questweaver_interface::*;
pub use questweaver_models::*;
pub use questweaver_narrative::*;
pub use questweaver_server::{ApiError, ApiState, create_router, serve};
