use axum::Json;
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "livekit-token-service";

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Liveness probe, always healthy while the process serves requests.
#[tracing::instrument]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
