//! Provider-neutral generation requests.

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// Generic generation request.
///
/// Each provider client picks the parameters its API understands and ignores
/// the rest (penalties, for instance, only reach OpenAI).
///
/// # Examples
///
/// ```
/// use questweaver_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::system("Be vivid"), Message::user("Hello!")])
///     .max_tokens(100u32)
///     .temperature(0.7f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 2);
/// assert_eq!(request.max_tokens, Some(100));
/// assert_eq!(request.system_prompt(), Some("Be vivid"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default, setter(strip_option))]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default, setter(strip_option))]
    pub temperature: Option<f32>,
    /// Penalty for tokens already present in the text
    #[builder(default, setter(strip_option))]
    pub presence_penalty: Option<f32>,
    /// Penalty scaled by token frequency
    #[builder(default, setter(strip_option))]
    pub frequency_penalty: Option<f32>,
    /// Model identifier to use
    #[builder(default, setter(strip_option, into))]
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Content of the first system message, if any.
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
    }

    /// Messages other than system instructions.
    pub fn conversation(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role != Role::System)
    }
}
