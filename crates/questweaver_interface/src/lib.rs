//! Trait definitions for QuestWeaver model drivers.
//!
//! Every provider client implements [`StoryDriver`]; the rest of the workspace
//! only ever talks to drivers through this trait, so pipeline code never
//! branches on which provider is behind it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::StoryDriver;
pub use types::Provider;
