use crate::anthropic::{
    AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse,
};
use crate::transport::{build_error, post_json};
use async_trait::async_trait;
use questweaver_core::{GenerateRequest, GenerateResponse, Output, Role};
use questweaver_error::{GenerationError, QuestweaverResult};
use questweaver_interface::{Provider, StoryDriver};
use reqwest::Client;
use tracing::{debug, instrument};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `endpoint` - Messages URL
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-3-5-sonnet-20241022")
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        debug!("Creating new Anthropic client");
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Sends a request to the Anthropic API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_anthropic(
        &self,
        request: &AnthropicRequest,
    ) -> Result<AnthropicResponse, GenerationError> {
        let builder = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION);

        let response: AnthropicResponse =
            post_json(Provider::Anthropic, builder, request).await?;
        debug!(response_id = %response.id(), "Received response from Anthropic");
        Ok(response)
    }

    /// Converts a generic request to an Anthropic API request.
    ///
    /// System messages move to the `system` parameter.
    pub fn convert_request(
        &self,
        request: &GenerateRequest,
    ) -> Result<AnthropicRequest, GenerationError> {
        let messages: Vec<AnthropicMessage> = request
            .conversation()
            .map(|msg| {
                let role = match msg.role {
                    Role::Assistant => "assistant",
                    Role::User | Role::System => "user",
                };
                AnthropicMessage::new(role, msg.content.clone())
            })
            .collect();

        if messages.is_empty() {
            return Err(build_error(
                Provider::Anthropic,
                "request has no user content",
            ));
        }

        AnthropicRequest::builder()
            .model(request.model.clone().unwrap_or_else(|| self.model.clone()))
            .max_tokens(request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
            .system(request.system_prompt().map(str::to_string))
            .messages(messages)
            .temperature(request.temperature)
            .build()
            .map_err(|e| build_error(Provider::Anthropic, e))
    }

    /// Converts an Anthropic API response to a generic response.
    pub fn convert_response(response: &AnthropicResponse) -> GenerateResponse {
        let mut outputs: Vec<Output> = response
            .content()
            .iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(Output::Text(text.clone())),
                AnthropicContentBlock::Other => None,
            })
            .collect();

        if response.stop_reason().as_deref() == Some("refusal") {
            outputs.push(Output::Blocked("refusal".to_string()));
        }

        GenerateResponse { outputs }
    }
}

#[async_trait]
impl StoryDriver for AnthropicClient {
    fn provider_name(&self) -> &'static str {
        Provider::Anthropic.as_str()
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerateRequest) -> QuestweaverResult<GenerateResponse> {
        debug!("Generating response with Anthropic");

        let anthropic_request = self.convert_request(request)?;
        let anthropic_response = self.generate_anthropic(&anthropic_request).await?;
        Ok(Self::convert_response(&anthropic_response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questweaver_core::Message;

    #[test]
    fn system_message_moves_to_system_parameter() {
        let client = AnthropicClient::new(
            Client::new(),
            "http://localhost",
            "key",
            "claude-3-5-sonnet-20241022",
        );
        let request = GenerateRequest::builder()
            .messages(vec![Message::system("narrate"), Message::user("tasks")])
            .temperature(0.7f32)
            .build()
            .unwrap();

        let json = serde_json::to_value(client.convert_request(&request).unwrap()).unwrap();

        assert_eq!(json["system"], "narrate");
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 4096);
    }

    #[test]
    fn non_text_blocks_are_skipped() {
        let response: AnthropicResponse = serde_json::from_str(
            r##"{"id": "m1", "content": [{"type": "text", "text": "# Saga"}, {"type": "thinking", "thinking": "..."}], "stop_reason": "end_turn"}"##,
        )
        .unwrap();

        let converted = AnthropicClient::convert_response(&response);
        assert_eq!(converted.text(), "# Saga");
    }
}
