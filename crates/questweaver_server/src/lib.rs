//! HTTP service for QuestWeaver.
//!
//! Exposes the story pipeline as a small JSON API:
//!
//! - `POST /api/generate` turns `{tasks, settings, model?}` into a story
//! - `GET /api/models` lists the model catalog
//! - `GET /health` reports liveness
//!
//! One immutable [`StoryPipeline`](questweaver_narrative::StoryPipeline) is
//! shared across requests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod error;
mod serve;

pub use api::{ApiState, ModelSummary, ModelsResponse, create_router};
pub use error::ApiError;
pub use serve::serve;
