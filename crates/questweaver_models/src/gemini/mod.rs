//! Google Gemini `generateContent` over REST.

mod client;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentRequestBuilder,
    GenerateContentResponse, GenerationConfig, Part, PromptFeedback,
};
