//! Wire types for the OpenAI chat completions endpoint.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One chat message, in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// "system", "user" or "assistant"
    role: String,
    /// Message text; null when the model produced none
    #[serde(default)]
    content: Option<String>,
}

impl ChatMessage {
    /// Creates a message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: Some(content.into()),
        }
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Serialize, derive_builder::Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Presence penalty
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f32>,
    /// Frequency penalty
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
    /// Output token cap
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    /// Creates a new request builder.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ChatChoice {
    /// Generated message
    message: ChatMessage,
    /// Why generation stopped ("stop", "length", "content_filter")
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Completion id
    #[serde(default)]
    id: String,
    /// Choices; only the first is used
    #[serde(default)]
    choices: Vec<ChatChoice>,
}
