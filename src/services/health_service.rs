use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Ping the storage backend and report whether it answered.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let backend = state.config().storage.as_str();
    match state.game_store().health_check().await {
        Ok(()) => HealthResponse::ok(backend),
        Err(err) => {
            warn!(error = %err, storage = backend, "storage health check failed");
            HealthResponse::degraded(backend)
        }
    }
}
