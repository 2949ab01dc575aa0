use contracts::usecases::u502_run_forecast::{ForecastRun, ForecastTriggerResponse};

/// Fixed so the latest run is deterministic until a real forecast runner exists
const STUB_RUN_TIME: &str = "2026-02-05T03:00:00Z";

/// Accept a forecast request. Nothing is queued yet.
pub fn trigger() -> ForecastTriggerResponse {
    tracing::info!("Forecast requested; no forecast runner configured");
    ForecastTriggerResponse {
        status: "accepted".to_string(),
        message: "Forecast job queued (stub - no queue connected)".to_string(),
    }
}

pub fn latest_run() -> ForecastRun {
    ForecastRun {
        id: "stub-run-001".to_string(),
        started_at: STUB_RUN_TIME.to_string(),
        completed_at: Some(STUB_RUN_TIME.to_string()),
        status: "success".to_string(),
        method: "moving_average".to_string(),
        rows_processed: 847,
        error_message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_responses() {
        assert_eq!(trigger().status, "accepted");

        let run = latest_run();
        assert_eq!(run.id, "stub-run-001");
        assert_eq!(run.completed_at.as_deref(), Some("2026-02-05T03:00:00Z"));
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["rowsProcessed"], 847);
        assert!(json["errorMessage"].is_null());
    }
}
