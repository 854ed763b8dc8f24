//! Server startup.

use crate::{ApiState, create_router};
use questweaver_error::{ServerError, ServerErrorKind};
use questweaver_narrative::StoryPipeline;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Binds `bind` and serves the API until the process is stopped.
///
/// # Errors
///
/// Returns [`ServerErrorKind::Bind`] when the address cannot be bound and
/// [`ServerErrorKind::Serve`] when the server loop fails.
#[instrument(skip(pipeline))]
pub async fn serve(pipeline: StoryPipeline, bind: &str) -> Result<(), ServerError> {
    let listener = TcpListener::bind(bind).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: bind.to_string(),
            message: e.to_string(),
        })
    })?;

    let local = listener
        .local_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| bind.to_string());
    info!(address = %local, "QuestWeaver API listening");

    axum::serve(listener, create_router(ApiState::new(pipeline)))
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))
}
