//! Routes and handlers.

use crate::ApiError;
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use questweaver_core::{GeneratedStory, StoryRequest};
use questweaver_interface::Provider;
use questweaver_narrative::StoryPipeline;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument};

/// API state containing the shared pipeline.
#[derive(Debug, Clone)]
pub struct ApiState {
    pipeline: Arc<StoryPipeline>,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(pipeline: StoryPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// The pipeline behind the routes.
    pub fn pipeline(&self) -> &StoryPipeline {
        &self.pipeline
    }
}

/// One catalog entry as listed by `GET /api/models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    /// Key clients send as `model`
    pub key: String,
    /// Provider serving the model
    pub provider: Provider,
    /// Provider-side model id
    pub model: String,
}

/// Body of `GET /api/models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelsResponse {
    /// Key used when a request names none
    pub default_model: String,
    /// Catalog in configuration order
    pub models: Vec<ModelSummary>,
}

/// Creates the QuestWeaver API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/models", get(list_models))
        .route("/api/generate", post(generate_story))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn list_models(State(state): State<ApiState>) -> Json<ModelsResponse> {
    let config = state.pipeline.invoker().config();
    Json(ModelsResponse {
        default_model: config.default_model.clone(),
        models: config
            .models
            .iter()
            .map(|spec| ModelSummary {
                key: spec.key.clone(),
                provider: spec.provider,
                model: spec.model.clone(),
            })
            .collect(),
    })
}

#[instrument(skip_all)]
async fn generate_story(
    State(state): State<ApiState>,
    body: Result<Json<StoryRequest>, JsonRejection>,
) -> Result<Json<GeneratedStory>, ApiError> {
    let Json(request) = body?;
    info!(
        tasks = request.tasks.len(),
        model = request.model.as_deref().unwrap_or("default"),
        "Story requested"
    );

    let story = state.pipeline.generate(&request).await?;
    Ok(Json(story))
}
