use axum::extract::{Path, Query};
use axum::Json;
use contracts::projections::p900_reorder_recommendations::Recommendation;
use serde::Deserialize;

use crate::domain::a001_product::repository;
use crate::projections::p900_reorder_recommendations::service;
use crate::shared::config;
use crate::shared::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub at_risk: Option<bool>,
    pub limit: Option<i64>,
}

/// GET /api/v1/recommendations
pub async fn list(Query(query): Query<ListQuery>) -> Result<Json<Vec<Recommendation>>, AppError> {
    let limit = super::check_limit(query.limit)?;
    let at_risk_only = query.at_risk.unwrap_or(false);

    let items = service::list(
        repository::store(),
        &config::get().heuristics,
        at_risk_only,
        limit,
    )
    .await;
    Ok(Json(items))
}

/// GET /api/v1/recommendations/:product_id
pub async fn get_by_product(
    Path(product_id): Path<String>,
) -> Result<Json<Recommendation>, AppError> {
    service::get_by_key(repository::store(), &config::get().heuristics, &product_id)
        .await
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!("Recommendation for product '{}' not found", product_id))
        })
}
