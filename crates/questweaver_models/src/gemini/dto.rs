//! Wire types for the Gemini `generateContent` endpoint.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A text part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Part {
    /// Part text
    #[serde(default)]
    text: Option<String>,
}

impl Part {
    /// Creates a text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// A turn of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Content {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Parts of the turn
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    /// Creates a turn with one text part.
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            parts: vec![Part::from_text(text)],
        }
    }
}

/// Sampling configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output token cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Serialize, derive_builder::Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    /// Conversation turns
    contents: Vec<Content>,
    /// Sampling configuration
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// One candidate answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content; absent when blocked
    #[serde(default)]
    content: Option<Content>,
    /// "STOP", "MAX_TOKENS", "SAFETY", ...
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Feedback on the prompt itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Set when the prompt was refused
    #[serde(default)]
    block_reason: Option<String>,
}

/// Response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates; only the first is used
    #[serde(default)]
    candidates: Vec<Candidate>,
    /// Prompt-level feedback
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}
