use serde::Serialize;
use utoipa::ToSchema;

/// Health payload returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
    /// Storage backend serving the games collection.
    pub storage: String,
}

impl HealthResponse {
    /// The storage backend answered its ping.
    pub fn ok(storage: &str) -> Self {
        Self {
            status: "ok".to_string(),
            storage: storage.to_string(),
        }
    }

    /// The storage backend did not answer.
    pub fn degraded(storage: &str) -> Self {
        Self {
            status: "degraded".to_string(),
            storage: storage.to_string(),
        }
    }
}
