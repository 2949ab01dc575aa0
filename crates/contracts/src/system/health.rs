use serde::{Deserialize, Serialize};

/// GET /healthz: the process is running
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /readyz: the process can serve traffic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub database: String,
}
