use axum::extract::Multipart;
use axum::Json;
use contracts::usecases::u501_import_inventory_csv::ImportResult;

use crate::domain::a001_product::repository;
use crate::shared::config;
use crate::shared::error::AppError;
use crate::usecases::u501_import_inventory_csv::service;

/// Multipart field carrying the CSV
const FILE_FIELD: &str = "file";

/// POST /api/v1/imports/upload
pub async fn upload(mut multipart: Multipart) -> Result<Json<ImportResult>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

        tracing::info!("Upload '{}' received ({} bytes)", filename, bytes.len());

        return service::import_upload(
            repository::store(),
            &config::get().imports,
            content_type.as_deref(),
            &bytes,
        )
        .await
        .map(Json)
        .map_err(|e| {
            tracing::warn!("Upload '{}' rejected: {}", filename, e);
            AppError::BadRequest(e.to_string())
        });
    }

    Err(AppError::BadRequest(format!(
        "Missing multipart field '{}'",
        FILE_FIELD
    )))
}
