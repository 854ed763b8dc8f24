//! Wire types for the Anthropic messages endpoint.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A conversation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct AnthropicMessage {
    /// "user" or "assistant"
    role: String,
    /// Message text
    content: String,
}

impl AnthropicMessage {
    /// Creates a message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Serialize, derive_builder::Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Output token cap (required by the API)
    max_tokens: u32,
    /// System instruction
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Conversation
    messages: Vec<AnthropicMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl AnthropicRequest {
    /// Creates a new request builder.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// A block of response content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    /// Text block
    Text {
        /// Block text
        text: String,
    },
    /// Any block type this client does not use
    #[serde(other)]
    Other,
}

/// Response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Message id
    #[serde(default)]
    id: String,
    /// Content blocks
    #[serde(default)]
    content: Vec<AnthropicContentBlock>,
    /// "end_turn", "max_tokens", "refusal", ...
    #[serde(default)]
    stop_reason: Option<String>,
}
