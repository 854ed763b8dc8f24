//! Mapping of pipeline errors onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use questweaver_error::{QuestweaverError, QuestweaverErrorKind};
use serde_json::json;
use tracing::{error, warn};

/// Error returned by API handlers; renders as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Request body was not a valid story request
    InvalidBody(String),
    /// The pipeline failed
    Pipeline(QuestweaverError),
}

impl ApiError {
    /// Status code for this error.
    ///
    /// Bad input maps to 400, provider failures to 502 and everything else
    /// to 500.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Pipeline(err) => match err.kind() {
                QuestweaverErrorKind::Configuration(_)
                | QuestweaverErrorKind::Task(_)
                | QuestweaverErrorKind::Json(_) => StatusCode::BAD_REQUEST,
                QuestweaverErrorKind::Generation(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Text sent to the client.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidBody(message) => message.clone(),
            Self::Pipeline(err) => err.message(),
        }
    }
}

impl From<QuestweaverError> for ApiError {
    fn from(err: QuestweaverError) -> Self {
        Self::Pipeline(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Pipeline(err) if status.is_server_error() => {
                error!(error = %err, status = status.as_u16(), "Story generation failed")
            }
            _ => warn!(status = status.as_u16(), message = %self.message(), "Request rejected"),
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
