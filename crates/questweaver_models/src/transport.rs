//! JSON-over-HTTP plumbing shared by the provider clients.

use questweaver_error::{GenerationError, GenerationErrorKind};
use questweaver_interface::Provider;
use reqwest::RequestBuilder;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

/// Sends `body` as JSON and decodes a successful JSON response.
///
/// Transport failures map to `Provider`, non-2xx statuses to `Api` and
/// undecodable bodies to `Decode`.
pub(crate) async fn post_json<B, R>(
    provider: Provider,
    request: RequestBuilder,
    body: &B,
) -> Result<R, GenerationError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let name = provider.as_str();
    debug!(provider = name, "Sending request");

    let response = request.json(body).send().await.map_err(|e| {
        error!(provider = name, error = ?e, "Failed to send request");
        GenerationError::new(GenerationErrorKind::Provider {
            provider: name.to_string(),
            message: e.to_string(),
        })
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(provider = name, status = %status, body = %body, "Provider returned error");
        return Err(GenerationError::new(GenerationErrorKind::Api {
            provider: name.to_string(),
            status: status.as_u16(),
            message: body,
        }));
    }

    response.json::<R>().await.map_err(|e| {
        error!(provider = name, error = ?e, "Failed to decode response");
        GenerationError::new(GenerationErrorKind::Decode {
            provider: name.to_string(),
            message: e.to_string(),
        })
    })
}

/// Error for a request DTO that failed to build.
#[track_caller]
pub(crate) fn build_error(provider: Provider, message: impl ToString) -> GenerationError {
    GenerationError::new(GenerationErrorKind::RequestBuild {
        provider: provider.as_str().to_string(),
        message: message.to_string(),
    })
}
