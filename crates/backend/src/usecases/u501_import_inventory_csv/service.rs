use contracts::usecases::u501_import_inventory_csv::ImportResult;
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;

use super::validator::{self, ImportRejection};
use crate::domain::a001_product::repository::UploadStore;
use crate::shared::config::ImportsConfig;

const ACCEPTED_CONTENT_TYPES: [&str; 4] = [
    "text/csv",
    "application/vnd.ms-excel",
    "application/octet-stream",
    "text/plain",
];

/// Validate an uploaded file and keep its accepted rows as the active data
pub async fn import_upload(
    store: &UploadStore,
    limits: &ImportsConfig,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<ImportResult, ImportRejection> {
    if let Some(content_type) = content_type {
        check_content_type(content_type)?;
    }

    if bytes.len() > limits.max_file_bytes {
        return Err(ImportRejection::TooLarge {
            size: bytes.len(),
            max: limits.max_file_bytes,
            max_mb: limits.max_file_bytes / (1024 * 1024),
        });
    }

    let content = decode(bytes)?;
    let validation = validator::validate_csv(&content, limits)?;

    tracing::info!(
        "Validated {} upload: {} rows, {} accepted, {} rejected",
        validation.csv_type,
        validation.total_rows,
        validation.accepted_rows.len(),
        validation.rejected_rows.len()
    );

    let accepted_preview = validation
        .accepted_rows
        .iter()
        .take(limits.preview_limit)
        .cloned()
        .collect();
    let result = ImportResult {
        csv_type: validation.csv_type,
        detected_columns: validation.detected_columns,
        required_columns: validation
            .csv_type
            .required_columns()
            .iter()
            .map(|c| c.to_string())
            .collect(),
        optional_columns_found: validation.optional_columns_found,
        total_rows: validation.total_rows,
        accepted_count: validation.accepted_rows.len(),
        rejected_count: validation.rejected_rows.len(),
        warnings: validation.warnings,
        accepted_preview,
        rejected_rows: validation.rejected_rows,
    };

    if !validation.accepted_rows.is_empty() {
        store
            .replace(validation.csv_type, validation.accepted_rows)
            .await;
    }

    Ok(result)
}

/// Parameters such as `; charset=utf-8` are ignored
fn check_content_type(content_type: &str) -> Result<(), ImportRejection> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if ACCEPTED_CONTENT_TYPES.contains(&essence.as_str()) {
        Ok(())
    } else {
        Err(ImportRejection::UnsupportedContentType(
            content_type.to_string(),
        ))
    }
}

/// UTF-8 first, then single-byte Latin-1 (Windows-1252)
fn decode(bytes: &[u8]) -> Result<Cow<'_, str>, ImportRejection> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(Cow::Borrowed(text));
    }
    let (text, had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(ImportRejection::Undecodable);
    }
    Ok(text)
}
