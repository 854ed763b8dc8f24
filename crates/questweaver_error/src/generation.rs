//! Model provider (generation) errors.

/// Specific generation error conditions.
///
/// Every variant carries the provider name so user-facing messages stay
/// provider-qualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Transport-level failure talking to the provider
    #[display("Failed to generate story with {}: {}", provider, message)]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },
    /// Provider answered with a non-success status
    #[display("Failed to generate story with {}: API error {}: {}", provider, status, message)]
    Api {
        /// Provider name
        provider: String,
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to generate story with {}: could not decode response: {}", provider, message)]
    Decode {
        /// Provider name
        provider: String,
        /// Decoder message
        message: String,
    },
    /// Provider refused to produce content
    #[display("Failed to generate story with {}: content blocked ({})", provider, reason)]
    ContentBlocked {
        /// Provider name
        provider: String,
        /// Block reason reported by the provider
        reason: String,
    },
    /// Provider returned no text
    #[display("No story generated by {}", provider)]
    EmptyResponse {
        /// Provider name
        provider: String,
    },
    /// Request could not be assembled
    #[display("Failed to build {} request: {}", provider, message)]
    RequestBuild {
        /// Provider name
        provider: String,
        /// Builder message
        message: String,
    },
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use questweaver_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse {
///     provider: "openai".to_string(),
/// });
/// assert!(format!("{}", err).contains("openai"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}
