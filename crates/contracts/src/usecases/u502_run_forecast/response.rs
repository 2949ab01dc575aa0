use serde::{Deserialize, Serialize};

/// Response of POST /api/v1/forecasts/trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastTriggerResponse {
    pub status: String,
    pub message: String,
}

/// Response of GET /api/v1/forecasts/runs/latest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRun {
    pub id: String,
    pub started_at: String,
    pub completed_at: Option<String>,
    pub status: String,
    pub method: String,
    pub rows_processed: u64,
    pub error_message: Option<String>,
}
