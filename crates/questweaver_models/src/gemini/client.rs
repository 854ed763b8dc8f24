use crate::gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::transport::{build_error, post_json};
use async_trait::async_trait;
use questweaver_core::{GenerateRequest, GenerateResponse, Output, Role};
use questweaver_error::{GenerationError, QuestweaverResult};
use questweaver_interface::{Provider, StoryDriver};
use reqwest::Client;
use tracing::{debug, instrument};

/// Gemini REST client.
///
/// Gemini receives the prompt as a single user turn with temperature and an
/// output token cap; system instructions and penalties are not sent.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// `base_url` is the models collection URL; requests go to
    /// `{base_url}/{model}:generateContent`.
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        debug!("Creating new Gemini client");
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Sends a request to the `generateContent` endpoint.
    #[instrument(skip(self, request), fields(model = %self.model))]
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let builder = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key);

        let response: GenerateContentResponse =
            post_json(Provider::Gemini, builder, request).await?;
        debug!(
            candidates = response.candidates().len(),
            "Received response from Gemini"
        );
        Ok(response)
    }

    /// Converts a generic request into the Gemini shape.
    pub fn convert_request(
        request: &GenerateRequest,
    ) -> Result<GenerateContentRequest, GenerationError> {
        let contents: Vec<Content> = request
            .conversation()
            .map(|msg| {
                let role = match msg.role {
                    Role::Assistant => "model",
                    Role::User | Role::System => "user",
                };
                Content::new(role, msg.content.clone())
            })
            .collect();

        if contents.is_empty() {
            return Err(build_error(
                Provider::Gemini,
                "request has no user content",
            ));
        }

        GenerateContentRequest::builder()
            .contents(contents)
            .generation_config(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            })
            .build()
            .map_err(|e| build_error(Provider::Gemini, e))
    }

    /// Reduces the first candidate to outputs.
    pub fn convert_response(response: &GenerateContentResponse) -> GenerateResponse {
        let mut outputs = Vec::new();

        if let Some(reason) = response
            .prompt_feedback()
            .as_ref()
            .and_then(|feedback| feedback.block_reason().clone())
        {
            outputs.push(Output::Blocked(reason));
            return GenerateResponse { outputs };
        }

        if let Some(candidate) = response.candidates().first() {
            if let Some(content) = candidate.content() {
                // Parts are fragments of one answer and may split a line.
                let text: String = content
                    .parts()
                    .iter()
                    .filter_map(|part| part.text().as_deref())
                    .collect();
                if !text.is_empty() {
                    outputs.push(Output::Text(text));
                }
            }
            if candidate.finish_reason().as_deref() == Some("SAFETY") {
                outputs.push(Output::Blocked("SAFETY".to_string()));
            }
        }

        GenerateResponse { outputs }
    }
}

#[async_trait]
impl StoryDriver for GeminiClient {
    fn provider_name(&self) -> &'static str {
        Provider::Gemini.as_str()
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerateRequest) -> QuestweaverResult<GenerateResponse> {
        debug!("Generating response with Gemini");

        let gemini_request = Self::convert_request(request)?;
        let gemini_response = self.generate_content(&gemini_request).await?;
        Ok(Self::convert_response(&gemini_response))
    }
}
