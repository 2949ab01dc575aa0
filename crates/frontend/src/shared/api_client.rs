//! Typed client for the backend API.
//!
//! Every call is aborted after [`REQUEST_TIMEOUT_MS`] and resolves to an
//! [`ApiResult`]; nothing here panics or throws.

use contracts::dashboards::d400_inventory_summary::DashboardSummary;
use contracts::domain::a001_product::Product;
use contracts::projections::p900_reorder_recommendations::Recommendation;
use contracts::shared::api_error::{ApiError, ApiResult};
use contracts::usecases::u501_import_inventory_csv::ImportResult;
use contracts::usecases::u502_run_forecast::{ForecastRun, ForecastTriggerResponse};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use web_sys::{AbortController, FormData};

use super::api_utils::api_url;

pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

// The read endpoints below mirror the backend surface; the pages compute
// the same data locally from the uploaded snapshot.

/// GET /api/v1/dashboard/summary
pub async fn fetch_dashboard_summary() -> ApiResult<DashboardSummary> {
    send(Request::get(&api_url("/api/v1/dashboard/summary")), None).await
}

/// GET /api/v1/products
pub async fn fetch_products() -> ApiResult<Vec<Product>> {
    send(Request::get(&api_url("/api/v1/products")), None).await
}

/// GET /api/v1/recommendations, optionally only at-risk items
pub async fn fetch_recommendations(at_risk: Option<bool>) -> ApiResult<Vec<Recommendation>> {
    let path = match at_risk {
        Some(flag) => format!("/api/v1/recommendations?at_risk={}", flag),
        None => "/api/v1/recommendations".to_string(),
    };
    send(Request::get(&api_url(&path)), None).await
}

/// POST /api/v1/imports/upload as multipart field `file`
pub async fn upload_csv_file(file: &web_sys::File) -> ApiResult<ImportResult> {
    let form = FormData::new().map_err(|e| ApiError::network(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::network(format!("{:?}", e)))?;
    send(Request::post(&api_url("/api/v1/imports/upload")), Some(form)).await
}

/// POST /api/v1/forecasts/trigger
pub async fn trigger_forecast() -> ApiResult<ForecastTriggerResponse> {
    send(Request::post(&api_url("/api/v1/forecasts/trigger")), None).await
}

/// GET /api/v1/forecasts/runs/latest
pub async fn fetch_latest_forecast_run() -> ApiResult<ForecastRun> {
    send(Request::get(&api_url("/api/v1/forecasts/runs/latest")), None).await
}

async fn send<T: DeserializeOwned>(builder: RequestBuilder, form: Option<FormData>) -> ApiResult<T> {
    let controller = AbortController::new().map_err(|e| ApiError::network(format!("{:?}", e)))?;
    let builder = builder.abort_signal(Some(&controller.signal()));
    let request = match form {
        Some(form) => builder.body(form),
        None => builder.build(),
    }
    .map_err(|e| ApiError::network(e.to_string()))?;

    // Dropping the timeout before it fires cancels it
    let timeout = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());
    let sent = request.send().await;
    drop(timeout);

    let response = sent.map_err(|e| match e {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => {
            log::warn!("Request aborted after {}ms", REQUEST_TIMEOUT_MS);
            ApiError::TimedOut
        }
        other => ApiError::network(other.to_string()),
    })?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::http(response.status(), body, &response.status_text()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::network(e.to_string()))
}
