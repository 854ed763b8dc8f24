//! Model catalog entries and resolved models.

use questweaver_interface::Provider;
use serde::{Deserialize, Serialize};

/// One entry of the model catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ModelSpec {
    /// Key clients select the model by (e.g., "gpt-4")
    pub key: String,
    /// Provider serving the model
    pub provider: Provider,
    /// Provider-side model identifier
    pub model: String,
    /// Output token cap
    pub max_tokens: u32,
}

impl ModelSpec {
    /// Creates a catalog entry.
    pub fn new(
        key: impl Into<String>,
        provider: Provider,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            key: key.into(),
            provider,
            model: model.into(),
            max_tokens,
        }
    }
}

/// A catalog entry joined with its endpoint and credential.
///
/// Produced by [`ModelInvoker::resolve`](crate::ModelInvoker::resolve) before
/// any network traffic happens.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    /// Catalog entry
    pub spec: ModelSpec,
    /// Provider endpoint
    pub base_url: String,
    /// API key read from the credential source
    pub api_key: String,
}

impl ResolvedModel {
    /// Provider serving the model.
    pub fn provider(&self) -> Provider {
        self.spec.provider
    }

    /// Provider-side model identifier.
    pub fn model(&self) -> &str {
        &self.spec.model
    }
}

impl std::fmt::Debug for ResolvedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedModel")
            .field("spec", &self.spec)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_api_key() {
        let resolved = ResolvedModel {
            spec: ModelSpec::new("gpt-4", Provider::OpenAi, "gpt-4-turbo-preview", 4000),
            base_url: "https://example.invalid".to_string(),
            api_key: "sk-secret".to_string(),
        };

        let debug = format!("{:?}", resolved);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("gpt-4-turbo-preview"));
    }
}
