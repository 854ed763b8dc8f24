//! Tasks (quests) as kept by the user.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use questweaver_error::{TaskError, TaskErrorKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind of quest a task represents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    /// Primary story arc
    #[default]
    #[display("Main Quest")]
    MainQuest,
    /// Optional adventure
    #[display("Side Quest")]
    SideQuest,
    /// Recurring daily quest
    #[display("Daily Quest")]
    Daily,
}

/// How hard a task is. Ordered from easiest to hardest.
///
/// # Examples
///
/// ```
/// use questweaver_core::Difficulty;
///
/// assert!(Difficulty::Normal < Difficulty::Hard);
/// assert!(Difficulty::Epic < Difficulty::Legendary);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// Everyday effort
    #[default]
    Normal,
    /// Noticeable effort
    Hard,
    /// Major undertaking
    Epic,
    /// The boss fight
    Legendary,
}

/// Lifecycle state of a task.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Open and eligible for story generation
    #[default]
    #[display("active")]
    Active,
    /// Done
    #[display("completed")]
    Completed,
    /// Done and put away
    #[display("archived")]
    Archived,
}

/// A task on the user's list.
///
/// Serialized with camelCase field names to match the wire format used by the
/// story endpoint.
///
/// # Examples
///
/// ```
/// use questweaver_core::{Difficulty, Task, TaskStatus, TaskType};
///
/// let task = Task::new("Clean desk", TaskType::Daily, Difficulty::Normal)
///     .with_description("Clear out the paper pile");
///
/// assert_eq!(task.title(), "Clean desk");
/// assert_eq!(*task.status(), TaskStatus::Active);
/// assert!(task.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier
    id: String,
    /// Short title
    title: String,
    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Quest type
    #[serde(rename = "type", default)]
    task_type: TaskType,
    /// Difficulty rating
    #[serde(default)]
    difficulty: Difficulty,
    /// Free-form time estimate ("2h", "30 minutes")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    estimated_time: Option<String>,
    /// Optional deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deadline: Option<DateTime<Utc>>,
    /// Lifecycle state
    #[serde(default)]
    status: TaskStatus,
    /// When the task was completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
    /// When the task was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new active task with a fresh UUID.
    pub fn new(title: impl Into<String>, task_type: TaskType, difficulty: Difficulty) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            task_type,
            difficulty,
            estimated_time: None,
            deadline: None,
            status: TaskStatus::Active,
            completed_at: None,
            created_at: Some(Utc::now()),
        }
    }

    /// Replaces the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the time estimate label.
    pub fn with_estimated_time(mut self, estimate: impl Into<String>) -> Self {
        self.estimated_time = Some(estimate.into());
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Whether the task is eligible for story generation.
    pub fn is_active(&self) -> bool {
        self.status == TaskStatus::Active
    }

    /// Marks an active task completed at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskErrorKind::InvalidTransition`] unless the task is active.
    pub fn complete(&mut self, at: DateTime<Utc>) -> Result<(), TaskError> {
        self.transition(TaskStatus::Completed)?;
        self.completed_at = Some(at);
        Ok(())
    }

    /// Archives a completed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskErrorKind::InvalidTransition`] unless the task is completed.
    /// Active tasks have to be completed first.
    pub fn archive(&mut self) -> Result<(), TaskError> {
        self.transition(TaskStatus::Archived)
    }

    #[track_caller]
    fn transition(&mut self, to: TaskStatus) -> Result<(), TaskError> {
        let allowed = matches!(
            (self.status, to),
            (TaskStatus::Active, TaskStatus::Completed)
                | (TaskStatus::Completed, TaskStatus::Archived)
        );

        if !allowed {
            return Err(TaskError::new(TaskErrorKind::InvalidTransition {
                id: self.id.clone(),
                from: self.status.to_string(),
                to: to.to_string(),
            }));
        }

        debug!(id = %self.id, from = %self.status, to = %to, "Task status change");
        self.status = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{
            "id": "t-1",
            "title": "Write report",
            "type": "SIDE_QUEST",
            "difficulty": "EPIC",
            "estimatedTime": "2h",
            "deadline": "2024-03-05T12:00:00Z",
            "status": "active"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id(), "t-1");
        assert_eq!(*task.task_type(), TaskType::SideQuest);
        assert_eq!(*task.difficulty(), Difficulty::Epic);
        assert_eq!(task.estimated_time().as_deref(), Some("2h"));
        assert!(task.deadline().is_some());
        assert!(task.description().is_none());
    }

    #[test]
    fn missing_status_defaults_to_active() {
        let task: Task = serde_json::from_str(r#"{"id": "a", "title": "b"}"#).unwrap();
        assert!(task.is_active());
        assert_eq!(*task.task_type(), TaskType::MainQuest);
        assert_eq!(*task.difficulty(), Difficulty::Normal);
    }

    #[test]
    fn type_labels_are_human_readable() {
        assert_eq!(TaskType::MainQuest.to_string(), "Main Quest");
        assert_eq!(TaskType::Daily.to_string(), "Daily Quest");
        assert_eq!(Difficulty::Legendary.to_string(), "Legendary");
    }
}
