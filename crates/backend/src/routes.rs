use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::shared::config::ImportsConfig;
use crate::{handlers, system};

/// All application routes
pub fn configure_routes(imports: &ImportsConfig) -> Router {
    // Leave room above the file limit so oversize uploads reach the size check
    // and get a readable message instead of a bare 413.
    let upload_body_limit = imports.max_file_bytes.saturating_mul(2);

    Router::new()
        // ========================================
        // SYSTEM
        // ========================================
        .route("/healthz", get(system::handlers::health::healthz))
        .route("/readyz", get(system::handlers::health::readyz))
        // ========================================
        // API V1
        // ========================================
        // D400 Inventory summary
        .route(
            "/api/v1/dashboard/summary",
            get(handlers::d400_inventory_summary::get_summary),
        )
        // A001 Product
        .route("/api/v1/products", get(handlers::a001_product::list))
        .route("/api/v1/products/:id", get(handlers::a001_product::get_by_id))
        // P900 Reorder recommendations
        .route(
            "/api/v1/recommendations",
            get(handlers::p900_reorder_recommendations::list),
        )
        .route(
            "/api/v1/recommendations/:product_id",
            get(handlers::p900_reorder_recommendations::get_by_product),
        )
        // U501 Import inventory CSV
        .route(
            "/api/v1/imports/upload",
            post(handlers::u501_import_inventory_csv::upload)
                .layer(DefaultBodyLimit::max(upload_body_limit)),
        )
        // U502 Forecasts
        .route(
            "/api/v1/forecasts/trigger",
            post(handlers::u502_run_forecast::trigger),
        )
        .route(
            "/api/v1/forecasts/runs/latest",
            get(handlers::u502_run_forecast::latest_run),
        )
}
