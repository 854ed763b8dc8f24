//! Model providers, catalog and invoker for QuestWeaver.
//!
//! Three providers are supported, each talked to over plain REST with
//! `reqwest`:
//!
//! - **OpenAI** chat completions (temperature, presence and frequency penalties, max tokens)
//! - **Gemini** `generateContent` (temperature, max output tokens)
//! - **Anthropic** messages (temperature, max tokens, system prompt)
//!
//! [`ModelInvoker`] turns a model key into a provider call and reduces the
//! provider's answer to one string, so callers never branch on provider.
//!
//! # Example
//!
//! ```no_run
//! use questweaver_core::NarrativeStyle;
//! use questweaver_models::{ModelInvoker, QuestweaverConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = QuestweaverConfig::load()?;
//! let params = config.generation.params_for(NarrativeStyle::EpicShonen);
//! let invoker = ModelInvoker::from_config(config);
//!
//! let model = invoker.resolve(Some("gpt-4"))?;
//! let text = invoker.invoke(&model, "You are a storyteller.", "Chapter 1: Clean desk", params).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod catalog;
mod config;
mod credentials;
mod factory;
mod gemini;
mod invoker;
mod openai;
mod transport;

pub use anthropic::{
    AnthropicClient, AnthropicContentBlock, AnthropicMessage, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse,
};
pub use catalog::{ModelSpec, ResolvedModel};
pub use config::{
    GenerationParams, GenerationSettings, ProviderSettings, Providers, QuestweaverConfig,
    ServerSettings,
};
pub use credentials::{CredentialSource, EnvCredentials};
pub use factory::{DriverFactory, HttpDriverFactory};
pub use gemini::{
    Candidate, Content, GeminiClient, GenerateContentRequest, GenerateContentRequestBuilder,
    GenerateContentResponse, GenerationConfig, Part, PromptFeedback,
};
pub use invoker::ModelInvoker;
pub use openai::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, OpenAiClient,
};
