use crate::openai::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::transport::{build_error, post_json};
use async_trait::async_trait;
use questweaver_core::{GenerateRequest, GenerateResponse, Output, Role};
use questweaver_error::{GenerationError, QuestweaverResult};
use questweaver_interface::{Provider, StoryDriver};
use reqwest::Client;
use tracing::{debug, instrument};

/// OpenAI chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI client.
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `endpoint` - Chat completions URL
    /// * `api_key` - OpenAI API key
    /// * `model` - Model identifier (e.g., "gpt-4-turbo-preview")
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        debug!("Creating new OpenAI client");
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Sends a request to the chat completions endpoint.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GenerationError> {
        let builder = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key);

        let response: ChatCompletionResponse =
            post_json(Provider::OpenAi, builder, request).await?;
        debug!(response_id = %response.id(), "Received response from OpenAI");
        Ok(response)
    }

    /// Converts a generic request into the OpenAI shape.
    pub fn convert_request(
        &self,
        request: &GenerateRequest,
    ) -> Result<ChatCompletionRequest, GenerationError> {
        let messages: Vec<ChatMessage> = request
            .messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                ChatMessage::new(role, msg.content.clone())
            })
            .collect();

        ChatCompletionRequest::builder()
            .model(request.model.clone().unwrap_or_else(|| self.model.clone()))
            .messages(messages)
            .temperature(request.temperature)
            .presence_penalty(request.presence_penalty)
            .frequency_penalty(request.frequency_penalty)
            .max_tokens(request.max_tokens)
            .build()
            .map_err(|e| build_error(Provider::OpenAi, e))
    }

    /// Reduces the first choice to outputs.
    pub fn convert_response(response: &ChatCompletionResponse) -> GenerateResponse {
        let Some(choice) = response.choices().first() else {
            return GenerateResponse::default();
        };

        let mut outputs = Vec::new();
        if let Some(text) = choice.message().content() {
            outputs.push(Output::Text(text.clone()));
        }
        if choice.finish_reason().as_deref() == Some("content_filter") {
            outputs.push(Output::Blocked("content_filter".to_string()));
        }

        GenerateResponse { outputs }
    }
}

#[async_trait]
impl StoryDriver for OpenAiClient {
    fn provider_name(&self) -> &'static str {
        Provider::OpenAi.as_str()
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerateRequest) -> QuestweaverResult<GenerateResponse> {
        debug!("Generating response with OpenAI");

        let openai_request = self.convert_request(request)?;
        let openai_response = self.complete(&openai_request).await?;
        Ok(Self::convert_response(&openai_response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questweaver_core::Message;

    fn client() -> OpenAiClient {
        OpenAiClient::new(Client::new(), "http://localhost", "key", "gpt-3.5-turbo")
    }

    #[test]
    fn request_carries_penalties_and_system_message() {
        let request = GenerateRequest::builder()
            .messages(vec![Message::system("narrate"), Message::user("tasks")])
            .max_tokens(4000u32)
            .temperature(0.7f32)
            .presence_penalty(0.3f32)
            .frequency_penalty(0.4f32)
            .build()
            .unwrap();

        let converted = client().convert_request(&request).unwrap();
        let json = serde_json::to_value(&converted).unwrap();

        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "tasks");
        assert_eq!(json["max_tokens"], 4000);
        assert!(json["presence_penalty"].as_f64().is_some());
        assert!(json["frequency_penalty"].as_f64().is_some());
    }

    #[test]
    fn null_content_yields_no_text() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"id": "c1", "choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "stop"}]}"#,
        )
        .unwrap();

        let converted = OpenAiClient::convert_response(&response);
        assert!(converted.text().is_empty());
        assert!(converted.blocked_reason().is_none());
    }

    #[test]
    fn content_filter_is_reported_as_blocked() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"id": "c2", "choices": [{"message": {"role": "assistant", "content": ""}, "finish_reason": "content_filter"}]}"#,
        )
        .unwrap();

        let converted = OpenAiClient::convert_response(&response);
        assert_eq!(converted.blocked_reason(), Some("content_filter"));
    }
}
