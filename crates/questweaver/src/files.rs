//! Loading CLI inputs from disk.

use questweaver_core::{StorySettings, Task};
use questweaver_error::{IoError, JsonError, QuestweaverResult};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, instrument};

/// Reads a whole file as UTF-8 text.
///
/// # Errors
///
/// Returns [`IoError`] naming the path when the file cannot be read.
pub fn read_text(path: &Path) -> QuestweaverResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| IoError::new(format!("Failed to read {}: {}", path.display(), e)).into())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> QuestweaverResult<T> {
    let text = read_text(path)?;
    let value = serde_json::from_str(&text)
        .map_err(|e| JsonError::in_file(path.display(), e))?;
    Ok(value)
}

/// Reads a JSON array of tasks.
///
/// # Errors
///
/// Returns [`IoError`] or [`JsonError`] when the file is missing or malformed.
#[instrument(fields(path = %path.display()))]
pub fn read_tasks(path: &Path) -> QuestweaverResult<Vec<Task>> {
    let tasks: Vec<Task> = read_json(path)?;
    debug!(count = tasks.len(), "Tasks loaded");
    Ok(tasks)
}

/// Reads JSON story settings.
///
/// # Errors
///
/// Returns [`IoError`] or [`JsonError`] when the file is missing or malformed.
#[instrument(fields(path = %path.display()))]
pub fn read_settings(path: &Path) -> QuestweaverResult<StorySettings> {
    read_json(path)
}
