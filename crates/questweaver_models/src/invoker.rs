//! The Model Invoker: model resolution, one provider call, text normalization.

use crate::{
    CredentialSource, DriverFactory, EnvCredentials, GenerationParams, HttpDriverFactory,
    QuestweaverConfig, ResolvedModel,
};
use questweaver_core::{GenerateRequest, Message};
use questweaver_error::{
    ConfigurationError, ConfigurationErrorKind, GenerationError, GenerationErrorKind,
    QuestweaverResult,
};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Resolves model keys and sends prompts to the matching provider.
///
/// Resolution (catalog lookup and credential check) never touches the
/// network; [`ModelInvoker::invoke`] makes exactly one provider call and does
/// not retry.
#[derive(Clone)]
pub struct ModelInvoker {
    config: Arc<QuestweaverConfig>,
    credentials: Arc<dyn CredentialSource>,
    factory: Arc<dyn DriverFactory>,
}

impl std::fmt::Debug for ModelInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelInvoker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ModelInvoker {
    /// Creates an invoker from explicit parts.
    pub fn new(
        config: QuestweaverConfig,
        credentials: impl CredentialSource + 'static,
        factory: impl DriverFactory + 'static,
    ) -> Self {
        Self {
            config: Arc::new(config),
            credentials: Arc::new(credentials),
            factory: Arc::new(factory),
        }
    }

    /// Production invoker: environment credentials and HTTP drivers.
    pub fn from_config(config: QuestweaverConfig) -> Self {
        Self::new(config, EnvCredentials, HttpDriverFactory::new())
    }

    /// Active configuration.
    pub fn config(&self) -> &QuestweaverConfig {
        &self.config
    }

    /// Resolves a model key (or the configured default) into a ready model.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationErrorKind::UnknownModel`] when the key is not in the catalog
    /// - [`ConfigurationErrorKind::MissingCredential`] when the provider's key is
    ///   absent or blank
    #[instrument(skip(self))]
    pub fn resolve(&self, key: Option<&str>) -> Result<ResolvedModel, ConfigurationError> {
        let key = key.unwrap_or(&self.config.default_model);

        let spec = self.config.model(key).ok_or_else(|| {
            error!(model = key, "Unknown model key");
            ConfigurationError::new(ConfigurationErrorKind::UnknownModel(key.to_string()))
        })?;

        let provider = self.config.providers.get(spec.provider);
        let api_key = self
            .credentials
            .lookup(&provider.api_key_env)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                error!(
                    provider = %spec.provider,
                    env_var = %provider.api_key_env,
                    "Missing provider credential"
                );
                ConfigurationError::new(ConfigurationErrorKind::MissingCredential {
                    provider: spec.provider.to_string(),
                    env_var: provider.api_key_env.clone(),
                })
            })?;

        debug!(model = key, provider = %spec.provider, "Resolved model");
        Ok(ResolvedModel {
            spec: spec.clone(),
            base_url: provider.base_url.clone(),
            api_key,
        })
    }

    /// Sends one prompt and returns the model's text.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] when the call fails, the provider blocks
    /// the content, or the response has no text.
    #[instrument(
        skip(self, model, system, prompt),
        fields(provider = %model.provider(), model_id = model.model(), prompt_len = prompt.len())
    )]
    pub async fn invoke(
        &self,
        model: &ResolvedModel,
        system: &str,
        prompt: &str,
        params: GenerationParams,
    ) -> QuestweaverResult<String> {
        let provider = model.provider().to_string();

        let request = GenerateRequest::builder()
            .messages(vec![Message::system(system), Message::user(prompt)])
            .max_tokens(model.spec.max_tokens)
            .temperature(params.temperature)
            .presence_penalty(params.presence_penalty)
            .frequency_penalty(params.frequency_penalty)
            .model(model.model())
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::RequestBuild {
                    provider: provider.clone(),
                    message: e.to_string(),
                })
            })?;

        let driver = self.factory.create(model)?;
        let response = driver.generate(&request).await?;

        if let Some(reason) = response.blocked_reason() {
            error!(provider = %provider, reason, "Provider blocked the content");
            return Err(GenerationError::new(GenerationErrorKind::ContentBlocked {
                provider,
                reason: reason.to_string(),
            })
            .into());
        }

        let text = response.text();
        if text.trim().is_empty() {
            error!(provider = %provider, "Provider returned no text");
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse { provider }).into());
        }

        debug!(chars = text.chars().count(), "Received story text");
        Ok(text)
    }
}
