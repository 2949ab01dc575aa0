use axum::http::StatusCode;
use axum::Json;
use contracts::usecases::u502_run_forecast::{ForecastRun, ForecastTriggerResponse};

use crate::usecases::u502_run_forecast::service;

/// POST /api/v1/forecasts/trigger
pub async fn trigger() -> (StatusCode, Json<ForecastTriggerResponse>) {
    (StatusCode::ACCEPTED, Json(service::trigger()))
}

/// GET /api/v1/forecasts/runs/latest
pub async fn latest_run() -> Json<ForecastRun> {
    Json(service::latest_run())
}
