use axum::Json;
use contracts::dashboards::d400_inventory_summary::DashboardSummary;

use crate::dashboards::d400_inventory_summary::service;
use crate::domain::a001_product::repository;
use crate::shared::config;

/// GET /api/v1/dashboard/summary
pub async fn get_summary() -> Json<DashboardSummary> {
    Json(service::get_summary(repository::store(), &config::get().heuristics).await)
}
