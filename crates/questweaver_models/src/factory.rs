//! Building drivers for resolved models.

use crate::{AnthropicClient, GeminiClient, OpenAiClient, ResolvedModel};
use questweaver_error::QuestweaverResult;
use questweaver_interface::{Provider, StoryDriver};
use reqwest::Client;
use tracing::debug;

/// Creates a driver for a resolved model.
pub trait DriverFactory: Send + Sync {
    /// Driver that will serve one generation.
    ///
    /// # Errors
    ///
    /// Implementations may fail when a driver cannot be constructed.
    fn create(&self, model: &ResolvedModel) -> QuestweaverResult<Box<dyn StoryDriver>>;
}

/// Factory producing the real HTTP clients, sharing one connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpDriverFactory {
    client: Client,
}

impl HttpDriverFactory {
    /// Creates a factory with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory reusing an existing HTTP client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl DriverFactory for HttpDriverFactory {
    fn create(&self, model: &ResolvedModel) -> QuestweaverResult<Box<dyn StoryDriver>> {
        debug!(provider = %model.provider(), model = model.model(), "Creating driver");

        let client = self.client.clone();
        let driver: Box<dyn StoryDriver> = match model.provider() {
            Provider::OpenAi => Box::new(OpenAiClient::new(
                client,
                &model.base_url,
                &model.api_key,
                model.model(),
            )),
            Provider::Gemini => Box::new(GeminiClient::new(
                client,
                &model.base_url,
                &model.api_key,
                model.model(),
            )),
            Provider::Anthropic => Box::new(AnthropicClient::new(
                client,
                &model.base_url,
                &model.api_key,
                model.model(),
            )),
        };

        Ok(driver)
    }
}
