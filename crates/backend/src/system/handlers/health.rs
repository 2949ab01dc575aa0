use axum::Json;
use contracts::system::health::{HealthResponse, ReadyResponse};

/// GET /healthz
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// GET /readyz
///
/// Nothing external to check: all data lives in memory.
pub async fn readyz() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready".to_string(),
        database: "not_connected".to_string(),
    })
}
