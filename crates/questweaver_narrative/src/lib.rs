//! Story pipeline for QuestWeaver.
//!
//! Turns a task list and narrative settings into a finished story:
//!
//! 1. [`build_prompt`] renders the tasks and settings into one instruction
//! 2. [`ModelInvoker`](questweaver_models::ModelInvoker) sends it to the selected provider
//! 3. [`parse_story`] recovers title, opening, chapters and epilogue from the reply
//! 4. [`assemble_story`] ties chapters back to task ids by position
//!
//! [`StoryPipeline`] runs all four; [`StoryState`] keeps client-side inputs
//! and drops stories generated from outdated inputs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod parser;
mod pipeline;
mod prompt;
mod state;

pub use assembler::assemble_story;
pub use parser::{ParseOptions, ParsedChapter, StorySkeleton, parse_story, parse_story_with};
pub use pipeline::{StoryPipeline, story_from_text};
pub use prompt::{SYSTEM_PROMPT, build_prompt, eligible_tasks};
pub use state::{GenerationTicket, StoryState};
