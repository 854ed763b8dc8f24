//! Malformed task and settings files.

/// A task list or settings file that did not deserialize.
///
/// `message` carries the full user-facing text; `path` names the offending
/// file when the error came from disk.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// What went wrong, including the path when known
    pub message: String,
    /// Data file that failed to parse
    pub path: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Creates an error not tied to a particular data file.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Creates an error for a data file, e.g. a `tasks.json` handed to the CLI.
    ///
    /// # Examples
    ///
    /// ```
    /// use questweaver_error::JsonError;
    ///
    /// let err = JsonError::in_file("tasks.json", "expected `,` or `]` at line 3 column 5");
    /// assert_eq!(err.path.as_deref(), Some("tasks.json"));
    /// assert_eq!(
    ///     err.message,
    ///     "Invalid JSON in tasks.json: expected `,` or `]` at line 3 column 5"
    /// );
    /// ```
    #[track_caller]
    pub fn in_file(path: impl std::fmt::Display, detail: impl std::fmt::Display) -> Self {
        let path = path.to_string();
        let mut err = Self::new(format!("Invalid JSON in {}: {}", path, detail));
        err.path = Some(path);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_file_records_caller_location() {
        let err = JsonError::in_file("settings.json", "missing field `theme`");
        assert!(err.file.ends_with("json.rs"));
        assert!(format!("{}", err).starts_with("JSON Error: Invalid JSON in settings.json"));
    }

    #[test]
    fn plain_errors_have_no_path() {
        assert!(JsonError::new("unexpected end of input").path.is_none());
    }
}
