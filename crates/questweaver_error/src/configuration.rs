//! Request configuration errors.
//!
//! These are raised before any network call is made and always point at input
//! the caller has to correct.

/// Specific configuration error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigurationErrorKind {
    /// No active tasks were supplied
    #[display("No tasks provided")]
    EmptyTaskList,
    /// Model key is not in the catalog
    #[display("Invalid model selected: {}", _0)]
    UnknownModel(String),
    /// Credential for the selected provider is absent
    #[display("{} API key not configured (set {})", provider, env_var)]
    MissingCredential {
        /// Provider name
        provider: String,
        /// Environment variable expected to hold the key
        env_var: String,
    },
    /// A `custom` selector has no free-text override
    #[display("Story setting '{}' is set to custom but has no description", _0)]
    SettingsNotConfigured(String),
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use questweaver_error::{ConfigurationError, ConfigurationErrorKind};
///
/// let err = ConfigurationError::new(ConfigurationErrorKind::EmptyTaskList);
/// assert!(format!("{}", err).contains("No tasks provided"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigurationError {
    /// The specific error condition
    pub kind: ConfigurationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ConfigurationError {
    /// Create a new ConfigurationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigurationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigurationErrorKind {
        &self.kind
    }
}
