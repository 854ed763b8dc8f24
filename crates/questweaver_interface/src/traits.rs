//! Driver trait implemented by every provider client.

use async_trait::async_trait;
use questweaver_core::{GenerateRequest, GenerateResponse};
use questweaver_error::QuestweaverResult;

/// A language model backend able to write story text.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use questweaver_core::{GenerateRequest, GenerateResponse};
/// use questweaver_error::QuestweaverResult;
/// use questweaver_interface::StoryDriver;
///
/// struct Echo;
///
/// #[async_trait]
/// impl StoryDriver for Echo {
///     async fn generate(&self, req: &GenerateRequest) -> QuestweaverResult<GenerateResponse> {
///         let prompt = req.conversation().map(|m| m.content.as_str()).collect::<String>();
///         Ok(GenerateResponse::from_text(prompt))
///     }
///
///     fn provider_name(&self) -> &'static str {
///         "echo"
///     }
///
///     fn model_name(&self) -> &str {
///         "echo-1"
///     }
/// }
/// ```
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> QuestweaverResult<GenerateResponse>;

    /// Provider name (e.g., "openai", "gemini", "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4-turbo-preview").
    fn model_name(&self) -> &str;
}
