//! The generated story and the request that produces it.

use crate::{StorySettings, Task};
use serde::{Deserialize, Serialize};

/// One task retold as a chapter of the story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformedTask {
    /// Id of the task this chapter belongs to
    pub id: String,
    /// The task's title as the user wrote it
    pub original_task: String,
    /// Chapter name chosen by the model
    pub quest_name: String,
    /// Chapter prose
    pub narrative: String,
    /// What victory looks like once the task is done
    pub completion: String,
}

/// A complete story, ready to render.
///
/// # Examples
///
/// ```
/// use questweaver_core::GeneratedStory;
///
/// let story = GeneratedStory {
///     title: "The Desk Saga".to_string(),
///     opening_scene: "Dust settles.".to_string(),
///     transformed_tasks: Vec::new(),
///     epilogue: "Rest.".to_string(),
/// };
///
/// let json = serde_json::to_value(&story).unwrap();
/// assert_eq!(json["openingScene"], "Dust settles.");
/// assert!(json["transformedTasks"].as_array().unwrap().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedStory {
    /// Story title, at most 100 characters
    pub title: String,
    /// Opening scene, at most 500 characters
    pub opening_scene: String,
    /// One entry per input task, in input order
    pub transformed_tasks: Vec<TransformedTask>,
    /// Epilogue, at most 500 characters
    pub epilogue: String,
}

impl GeneratedStory {
    /// Chapter for the given task id.
    pub fn chapter_for(&self, task_id: &str) -> Option<&TransformedTask> {
        self.transformed_tasks.iter().find(|t| t.id == task_id)
    }
}

/// Body of a story generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    /// The user's tasks; only active ones become chapters
    pub tasks: Vec<Task>,
    /// Narrative settings
    pub settings: StorySettings,
    /// Model key; the configured default is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl StoryRequest {
    /// Creates a request using the default model.
    pub fn new(tasks: Vec<Task>, settings: StorySettings) -> Self {
        Self {
            tasks,
            settings,
            model: None,
        }
    }

    /// Selects a model key.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}
