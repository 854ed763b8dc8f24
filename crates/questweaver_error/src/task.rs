//! Task lifecycle errors.

/// Specific task error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TaskErrorKind {
    /// Status change not allowed by the lifecycle
    #[display("Task '{}' cannot move from {} to {}", id, from, to)]
    InvalidTransition {
        /// Task id
        id: String,
        /// Current status
        from: String,
        /// Requested status
        to: String,
    },
    /// No task with this id
    #[display("Task not found: {}", _0)]
    NotFound(String),
    /// Another task already uses this id
    #[display("Duplicate task id: {}", _0)]
    DuplicateId(String),
}

/// Task error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Task Error: {} at line {} in {}", kind, line, file)]
pub struct TaskError {
    /// The specific error condition
    pub kind: TaskErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TaskError {
    /// Create a new TaskError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TaskErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TaskErrorKind {
        &self.kind
    }
}
