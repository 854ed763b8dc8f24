//! Layered configuration for providers, the model catalog and the server.
//!
//! Sources, lowest precedence first:
//! 1. Bundled defaults (`questweaver.toml` shipped with the library)
//! 2. `~/.config/questweaver/questweaver.toml`
//! 3. `./questweaver.toml`
//! 4. `QUESTWEAVER__<SECTION>__<KEY>` environment variables
//!
//! User files are optional and silently skipped when absent.

use crate::ModelSpec;
use config::{Config, Environment, File, FileFormat};
use questweaver_core::NarrativeStyle;
use questweaver_error::{ConfigError, QuestweaverResult};
use questweaver_interface::Provider;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../questweaver.toml");

/// Connection details for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderSettings {
    /// Endpoint URL
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl ProviderSettings {
    fn new(base_url: &str, api_key_env: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key_env: api_key_env.to_string(),
        }
    }
}

/// Connection details for every supported provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Providers {
    /// OpenAI chat completions
    pub openai: ProviderSettings,
    /// Google Gemini
    pub gemini: ProviderSettings,
    /// Anthropic messages
    pub anthropic: ProviderSettings,
}

impl Default for Providers {
    fn default() -> Self {
        Self {
            openai: ProviderSettings::new(
                "https://api.openai.com/v1/chat/completions",
                "OPENAI_API_KEY",
            ),
            gemini: ProviderSettings::new(
                "https://generativelanguage.googleapis.com/v1beta/models",
                "GOOGLE_AI_API_KEY",
            ),
            anthropic: ProviderSettings::new(
                "https://api.anthropic.com/v1/messages",
                "ANTHROPIC_API_KEY",
            ),
        }
    }
}

impl Providers {
    /// Settings for the given provider.
    pub fn get(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::OpenAi => &self.openai,
            Provider::Gemini => &self.gemini,
            Provider::Anthropic => &self.anthropic,
        }
    }
}

/// HTTP service settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Socket address to bind
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Sampling parameters sent with a generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Sampling temperature
    pub temperature: f32,
    /// Penalty for tokens already present
    pub presence_penalty: f32,
    /// Penalty scaled by token frequency
    pub frequency_penalty: f32,
}

/// Tunable generation parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Temperature for most narrative styles
    pub temperature: f32,
    /// Temperature for the mysterious supernatural style
    pub mysterious_temperature: f32,
    /// Presence penalty (OpenAI only)
    pub presence_penalty: f32,
    /// Frequency penalty (OpenAI only)
    pub frequency_penalty: f32,
    /// Replaces the built-in system instruction when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            mysterious_temperature: 0.85,
            presence_penalty: 0.3,
            frequency_penalty: 0.4,
            system_prompt: None,
        }
    }
}

impl GenerationSettings {
    /// Parameters for a story told in the given style.
    ///
    /// # Examples
    ///
    /// ```
    /// use questweaver_core::NarrativeStyle;
    /// use questweaver_models::GenerationSettings;
    ///
    /// let settings = GenerationSettings::default();
    /// assert_eq!(settings.params_for(NarrativeStyle::MysteriousSupernatural).temperature, 0.85);
    /// assert_eq!(settings.params_for(NarrativeStyle::EpicShonen).temperature, 0.7);
    /// ```
    pub fn params_for(&self, style: NarrativeStyle) -> GenerationParams {
        let temperature = if style.is_mysterious() {
            self.mysterious_temperature
        } else {
            self.temperature
        };

        GenerationParams {
            temperature,
            presence_penalty: self.presence_penalty,
            frequency_penalty: self.frequency_penalty,
        }
    }
}

fn default_model_key() -> String {
    "gpt-4".to_string()
}

fn default_models() -> Vec<ModelSpec> {
    vec![
        ModelSpec::new("gpt-4", Provider::OpenAi, "gpt-4-turbo-preview", 4000),
        ModelSpec::new("gpt-3.5", Provider::OpenAi, "gpt-3.5-turbo", 4000),
        ModelSpec::new("gemini-pro", Provider::Gemini, "gemini-pro", 4000),
        ModelSpec::new(
            "claude-sonnet",
            Provider::Anthropic,
            "claude-3-5-sonnet-20241022",
            4000,
        ),
    ]
}

/// Top-level QuestWeaver configuration.
///
/// # Example
///
/// ```no_run
/// use questweaver_models::QuestweaverConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = QuestweaverConfig::load()?;
/// let model = config.model(&config.default_model).unwrap();
/// println!("{} -> {}", model.key, model.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuestweaverConfig {
    /// Model key used when a request does not name one
    #[serde(default = "default_model_key")]
    pub default_model: String,

    /// HTTP service settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Generation parameters
    #[serde(default)]
    pub generation: GenerationSettings,

    /// Provider endpoints and credential variables
    #[serde(default)]
    pub providers: Providers,

    /// Model catalog
    #[serde(default = "default_models")]
    pub models: Vec<ModelSpec>,
}

impl Default for QuestweaverConfig {
    fn default() -> Self {
        Self {
            default_model: default_model_key(),
            server: ServerSettings::default(),
            generation: GenerationSettings::default(),
            providers: Providers::default(),
            models: default_models(),
        }
    }
}

impl QuestweaverConfig {
    /// Load configuration from a specific file path.
    ///
    /// Sections missing from the file take their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> QuestweaverResult<Self> {
        debug!("Loading configuration from file");

        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?;

        Self::deserialize_checked(config)
    }

    /// Only the configuration bundled with the library.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file does not parse.
    pub fn bundled() -> QuestweaverResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read bundled configuration: {}", e)))?;

        Self::deserialize_checked(config)
    }

    /// Load configuration with every layer applied.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse or the result is
    /// inconsistent (for example a default model missing from the catalog).
    #[instrument]
    pub fn load() -> QuestweaverResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/questweaver/questweaver.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("questweaver").required(false))
            .add_source(
                Environment::with_prefix("QUESTWEAVER")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?;

        Self::deserialize_checked(config)
    }

    fn deserialize_checked(config: Config) -> QuestweaverResult<Self> {
        let config: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        debug!(
            default_model = %config.default_model,
            models = config.models.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Checks catalog consistency.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate model keys or a default model that is not
    /// in the catalog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, spec) in self.models.iter().enumerate() {
            if self.models[..index].iter().any(|m| m.key == spec.key) {
                return Err(ConfigError::new(format!(
                    "Duplicate model key in catalog: {}",
                    spec.key
                )));
            }
        }

        if self.model(&self.default_model).is_none() {
            return Err(ConfigError::new(format!(
                "Default model '{}' is not in the model catalog",
                self.default_model
            )));
        }

        Ok(())
    }

    /// Catalog entry for a model key.
    pub fn model(&self, key: &str) -> Option<&ModelSpec> {
        self.models.iter().find(|m| m.key == key)
    }

    /// Catalog keys in configuration order.
    pub fn model_keys(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_matches_built_in_defaults() {
        let bundled = QuestweaverConfig::bundled().unwrap();
        assert_eq!(bundled, QuestweaverConfig::default());
    }

    #[test]
    fn providers_lookup() {
        let providers = Providers::default();
        assert_eq!(
            providers.get(Provider::Gemini).api_key_env,
            "GOOGLE_AI_API_KEY"
        );
        assert!(
            providers
                .get(Provider::Anthropic)
                .base_url
                .ends_with("/v1/messages")
        );
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut config = QuestweaverConfig::default();
        config
            .models
            .push(ModelSpec::new("gpt-4", Provider::OpenAi, "gpt-4o", 1000));
        assert!(config.validate().is_err());
    }
}
