use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a001_product::Product;
use serde::Deserialize;

use crate::domain::a001_product::{repository, service, service::ProductSort};
use crate::shared::config;
use crate::shared::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/v1/products
pub async fn list(Query(query): Query<ListQuery>) -> Result<Json<Vec<Product>>, AppError> {
    let limit = super::check_limit(query.limit)?;
    let sort = ProductSort::parse(query.sort.as_deref().unwrap_or("sku"));

    let products = service::list(repository::store(), &config::get().heuristics, sort, limit).await;
    Ok(Json(products))
}

/// GET /api/v1/products/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, AppError> {
    service::get_by_key(repository::store(), &config::get().heuristics, &id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", id)))
}
