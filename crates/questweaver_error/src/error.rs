//! Top-level error wrapper types.

use crate::{
    ConfigError, ConfigurationError, GenerationError, IoError, JsonError, ParseError,
    ServerError, TaskError,
};

/// Every error condition the workspace can raise.
///
/// # Examples
///
/// ```
/// use questweaver_error::{QuestweaverError, JsonError};
///
/// let json_err = JsonError::new("unexpected end of input");
/// let err: QuestweaverError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum QuestweaverErrorKind {
    /// Request configuration error (bad input, unknown model, missing key)
    #[from(ConfigurationError)]
    Configuration(ConfigurationError),
    /// Provider call failed or returned nothing
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Model output could not be segmented
    #[from(ParseError)]
    Parse(ParseError),
    /// Task lifecycle violation
    #[from(TaskError)]
    Task(TaskError),
    /// Configuration file error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// File I/O error
    #[from(IoError)]
    Io(IoError),
    /// HTTP service error
    #[from(ServerError)]
    Server(ServerError),
}

/// QuestWeaver error with kind discrimination.
///
/// `Display` includes the source location and is meant for logs; use
/// [`QuestweaverError::message`] for text shown to end users.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("QuestWeaver Error: {}", _0)]
pub struct QuestweaverError(Box<QuestweaverErrorKind>);

impl QuestweaverError {
    /// Create a new error from a kind.
    pub fn new(kind: QuestweaverErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &QuestweaverErrorKind {
        &self.0
    }

    /// Human-readable message without source location.
    pub fn message(&self) -> String {
        match self.kind() {
            QuestweaverErrorKind::Configuration(e) => e.kind.to_string(),
            QuestweaverErrorKind::Generation(e) => e.kind.to_string(),
            QuestweaverErrorKind::Parse(e) => e.kind.to_string(),
            QuestweaverErrorKind::Task(e) => e.kind.to_string(),
            QuestweaverErrorKind::Config(e) => e.message.clone(),
            QuestweaverErrorKind::Json(e) => e.message.clone(),
            QuestweaverErrorKind::Io(e) => e.message.clone(),
            QuestweaverErrorKind::Server(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to QuestweaverErrorKind
impl<T> From<T> for QuestweaverError
where
    T: Into<QuestweaverErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for QuestWeaver operations.
pub type QuestweaverResult<T> = std::result::Result<T, QuestweaverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigurationErrorKind, GenerationErrorKind};

    #[test]
    fn message_strips_location() {
        let err: QuestweaverError = GenerationError::new(GenerationErrorKind::Provider {
            provider: "openai".to_string(),
            message: "connection reset".to_string(),
        })
        .into();

        assert_eq!(
            err.message(),
            "Failed to generate story with openai: connection reset"
        );
        assert!(format!("{}", err).contains("error.rs"));
    }

    #[test]
    fn kind_is_preserved_through_conversion() {
        let err: QuestweaverError =
            ConfigurationError::new(ConfigurationErrorKind::EmptyTaskList).into();

        assert!(matches!(
            err.kind(),
            QuestweaverErrorKind::Configuration(e) if e.kind == ConfigurationErrorKind::EmptyTaskList
        ));
    }

    #[test]
    fn missing_credential_names_env_var() {
        let kind = ConfigurationErrorKind::MissingCredential {
            provider: "gemini".to_string(),
            env_var: "GOOGLE_AI_API_KEY".to_string(),
        };
        assert_eq!(
            kind.to_string(),
            "gemini API key not configured (set GOOGLE_AI_API_KEY)"
        );
    }
}
