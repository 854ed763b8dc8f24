//! Output types from LLM responses.

use serde::{Deserialize, Serialize};

/// A piece of model output after provider-specific decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
    /// The provider refused to answer; carries the reported reason.
    Blocked(String),
}

/// The unified response object every provider client returns.
///
/// # Examples
///
/// ```
/// use questweaver_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![
///         Output::Text("# The Desk".to_string()),
///         Output::Text("## Opening Scene".to_string()),
///     ],
/// };
///
/// assert_eq!(response.text(), "# The Desk\n## Opening Scene");
/// assert!(response.blocked_reason().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Creates a response holding a single text output.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            outputs: vec![Output::Text(text.into())],
        }
    }

    /// All text outputs joined with newlines.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .filter_map(|output| match output {
                Output::Text(text) => Some(text.as_str()),
                Output::Blocked(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The first block reason reported by the provider.
    pub fn blocked_reason(&self) -> Option<&str> {
        self.outputs.iter().find_map(|output| match output {
            Output::Blocked(reason) => Some(reason.as_str()),
            Output::Text(_) => None,
        })
    }
}
