//! Client-side story state with synchronous invalidation.
//!
//! Any change to the inputs of a generation (tasks, settings, model) clears
//! the stored story and bumps a revision counter. Generations carry the
//! revision they started from so stale results can be dropped.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use questweaver_core::{GeneratedStory, StoryRequest, StorySettings, Task};
use questweaver_error::{TaskError, TaskErrorKind};
use tracing::debug;

/// Snapshot of the input revision a generation started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationTicket {
    revision: u64,
}

impl GenerationTicket {
    /// Revision the ticket was issued at.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Tasks, settings, model selection and the last generated story.
///
/// # Examples
///
/// ```
/// use questweaver_core::{Difficulty, GeneratedStory, Task, TaskType};
/// use questweaver_narrative::StoryState;
///
/// let mut state = StoryState::new();
/// state.add_task(Task::new("Clean desk", TaskType::Daily, Difficulty::Normal)).unwrap();
///
/// let (ticket, request) = state.begin_generation();
/// assert_eq!(request.tasks.len(), 1);
///
/// // The user edits the list while the story is being written.
/// state.add_task(Task::new("Call client", TaskType::SideQuest, Difficulty::Hard)).unwrap();
///
/// let story = GeneratedStory {
///     title: "Stale".to_string(),
///     opening_scene: String::new(),
///     transformed_tasks: Vec::new(),
///     epilogue: String::new(),
/// };
/// assert!(!state.finish_generation(ticket, story));
/// assert!(state.story().is_none());
/// ```
#[derive(Debug, Clone, Default, Getters)]
pub struct StoryState {
    /// Task list in display order
    tasks: Vec<Task>,
    /// Narrative settings
    settings: StorySettings,
    /// Selected model key; `None` uses the configured default
    model: Option<String>,
    /// Last story stored
    story: Option<GeneratedStory>,
    /// Incremented on every input change
    revision: u64,
}

impl StoryState {
    /// Empty state with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    fn invalidate(&mut self) {
        self.revision += 1;
        if self.story.take().is_some() {
            debug!(revision = self.revision, "Stored story invalidated");
        }
    }

    fn position(&self, id: &str) -> Result<usize, TaskError> {
        self.tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| TaskError::new(TaskErrorKind::NotFound(id.to_string())))
    }

    /// Replaces the whole task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskErrorKind::DuplicateId`] if two tasks share an id; the
    /// state is left unchanged.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> Result<(), TaskError> {
        for (index, task) in tasks.iter().enumerate() {
            if tasks[..index].iter().any(|other| other.id() == task.id()) {
                return Err(TaskError::new(TaskErrorKind::DuplicateId(task.id().clone())));
            }
        }
        self.tasks = tasks;
        self.invalidate();
        Ok(())
    }

    /// Appends a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskErrorKind::DuplicateId`] if the id is taken.
    pub fn add_task(&mut self, task: Task) -> Result<(), TaskError> {
        if self.position(task.id()).is_ok() {
            return Err(TaskError::new(TaskErrorKind::DuplicateId(task.id().clone())));
        }
        self.tasks.push(task);
        self.invalidate();
        Ok(())
    }

    /// Replaces the task with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskErrorKind::NotFound`] if no task has that id.
    pub fn update_task(&mut self, task: Task) -> Result<(), TaskError> {
        let index = self.position(task.id())?;
        self.tasks[index] = task;
        self.invalidate();
        Ok(())
    }

    /// Removes and returns a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskErrorKind::NotFound`] if no task has that id.
    pub fn remove_task(&mut self, id: &str) -> Result<Task, TaskError> {
        let index = self.position(id)?;
        let task = self.tasks.remove(index);
        self.invalidate();
        Ok(task)
    }

    /// Completes an active task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskErrorKind::NotFound`] or
    /// [`TaskErrorKind::InvalidTransition`].
    pub fn complete_task(&mut self, id: &str, at: DateTime<Utc>) -> Result<(), TaskError> {
        let index = self.position(id)?;
        self.tasks[index].complete(at)?;
        self.invalidate();
        Ok(())
    }

    /// Archives a completed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskErrorKind::NotFound`] or
    /// [`TaskErrorKind::InvalidTransition`].
    pub fn archive_task(&mut self, id: &str) -> Result<(), TaskError> {
        let index = self.position(id)?;
        self.tasks[index].archive()?;
        self.invalidate();
        Ok(())
    }

    /// Replaces the narrative settings.
    pub fn set_settings(&mut self, settings: StorySettings) {
        self.settings = settings;
        self.invalidate();
    }

    /// Selects a model key.
    pub fn set_model(&mut self, model: Option<String>) {
        self.model = model;
        self.invalidate();
    }

    /// Tasks that will become chapters.
    pub fn active_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.is_active())
    }

    /// Ticket for the current inputs and the request to send.
    pub fn begin_generation(&self) -> (GenerationTicket, StoryRequest) {
        let ticket = GenerationTicket {
            revision: self.revision,
        };
        let request = StoryRequest {
            tasks: self.tasks.clone(),
            settings: self.settings.clone(),
            model: self.model.clone(),
        };
        debug!(revision = self.revision, "Generation started");
        (ticket, request)
    }

    /// Stores `story` if no input changed since `ticket` was issued.
    ///
    /// Returns whether the story was stored.
    pub fn finish_generation(&mut self, ticket: GenerationTicket, story: GeneratedStory) -> bool {
        if ticket.revision != self.revision {
            debug!(
                ticket = ticket.revision,
                current = self.revision,
                "Dropping stale story"
            );
            return false;
        }
        self.story = Some(story);
        true
    }

    /// Replaces the stored story.
    pub fn set_story(&mut self, story: GeneratedStory) {
        self.story = Some(story);
    }

    /// Clears the stored story.
    pub fn clear_story(&mut self) {
        self.story = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questweaver_core::{Difficulty, TaskType, Universe};

    fn story() -> GeneratedStory {
        GeneratedStory {
            title: "T".to_string(),
            opening_scene: "O".to_string(),
            transformed_tasks: Vec::new(),
            epilogue: "E".to_string(),
        }
    }

    fn task(id: &str) -> Task {
        Task::new(id, TaskType::Daily, Difficulty::Normal).with_id(id)
    }

    #[test]
    fn fresh_generation_is_stored() {
        let mut state = StoryState::new();
        state.add_task(task("a")).unwrap();

        let (ticket, _) = state.begin_generation();
        assert!(state.finish_generation(ticket, story()));
        assert_eq!(state.story().as_ref().map(|s| s.title.as_str()), Some("T"));
    }

    #[test]
    fn every_input_change_clears_story() {
        let mut state = StoryState::new();
        state.set_tasks(vec![task("a"), task("b")]).unwrap();

        type Change = Box<dyn Fn(&mut StoryState)>;
        let changes: Vec<Change> = vec![
            Box::new(|s: &mut StoryState| {
                s.set_settings(StorySettings::default().with_custom_universe("x"))
            }),
            Box::new(|s: &mut StoryState| s.set_model(Some("gpt-3.5".to_string()))),
            Box::new(|s: &mut StoryState| {
                s.update_task(task("a").with_description("new")).unwrap()
            }),
            Box::new(|s: &mut StoryState| s.complete_task("a", Utc::now()).unwrap()),
            Box::new(|s: &mut StoryState| s.archive_task("a").unwrap()),
            Box::new(|s: &mut StoryState| {
                s.remove_task("b").unwrap();
            }),
            Box::new(|s: &mut StoryState| s.add_task(task("c")).unwrap()),
        ];

        for change in changes {
            state.set_story(story());
            let before = *state.revision();
            change(&mut state);
            assert!(state.story().is_none());
            assert_eq!(*state.revision(), before + 1);
        }
        assert_eq!(*state.settings().universe(), Universe::Custom);
    }

    #[test]
    fn failed_mutation_keeps_story() {
        let mut state = StoryState::new();
        state.add_task(task("a")).unwrap();
        state.set_story(story());

        assert!(state.add_task(task("a")).is_err());
        assert!(state.archive_task("a").is_err());
        assert!(state.remove_task("zzz").is_err());
        assert!(state.story().is_some());
    }

    #[test]
    fn duplicate_ids_are_rejected_by_set_tasks() {
        let mut state = StoryState::new();
        let err = state.set_tasks(vec![task("a"), task("a")]).unwrap_err();
        assert_eq!(err.kind, TaskErrorKind::DuplicateId("a".to_string()));
        assert!(state.tasks().is_empty());
    }

    #[test]
    fn active_tasks_skip_completed() {
        let mut state = StoryState::new();
        state.set_tasks(vec![task("a"), task("b")]).unwrap();
        state.complete_task("a", Utc::now()).unwrap();

        let ids: Vec<&str> = state.active_tasks().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn clear_story_is_explicit() {
        let mut state = StoryState::new();
        state.set_story(story());
        let revision = *state.revision();
        state.clear_story();
        assert!(state.story().is_none());
        assert_eq!(*state.revision(), revision);
    }
}
