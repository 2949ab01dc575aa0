//! Server-side validation of uploaded CSV files.
//!
//! The CSV type is detected from the (trimmed, lowercased) header row. Each
//! data row is checked field by field against the required columns of that
//! type; extra columns pass through unchecked. Everything the validator
//! changes on the way (header casing, trimmed cells, the row cap) is
//! reported in the warnings list.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use contracts::usecases::u501_import_inventory_csv::{CsvType, RejectedRow};
use thiserror::Error;

use crate::domain::a001_product::repository::UploadedRow;
use crate::shared::config::ImportsConfig;

/// Upload refused as a whole; the message goes back to the client verbatim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportRejection {
    #[error("Expected a CSV file, got content type '{0}'")]
    UnsupportedContentType(String),
    #[error("File too large ({size} bytes). Maximum is {max} bytes ({max_mb} MB).")]
    TooLarge { size: usize, max: usize, max_mb: usize },
    #[error("Could not decode file. Please upload a UTF-8 or Latin-1 encoded CSV.")]
    Undecodable,
    #[error("CSV file is empty or has no headers")]
    NoHeaders,
    #[error("Failed to parse CSV: {0}")]
    Malformed(String),
    #[error(
        "Could not detect CSV type. Required columns for inventory_snapshot: [{}]. Required columns for sales_history: [{}]. Detected columns: [{}]",
        CsvType::InventorySnapshot.required_columns().join(", "),
        CsvType::SalesHistory.required_columns().join(", "),
        .detected.join(", ")
    )]
    UnknownType { detected: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub csv_type: CsvType,
    pub detected_columns: Vec<String>,
    pub optional_columns_found: Vec<String>,
    pub accepted_rows: Vec<UploadedRow>,
    pub rejected_rows: Vec<RejectedRow>,
    pub warnings: Vec<String>,
    /// Data rows examined, at most `max_rows`
    pub total_rows: usize,
}

/// Check a single cell of a required column
type FieldCheck = fn(&str, &str) -> Option<String>;

fn field_check(csv_type: CsvType, column: &str) -> FieldCheck {
    match (csv_type, column) {
        (CsvType::InventorySnapshot, "available") => non_negative_int,
        (CsvType::InventorySnapshot, "unit_cost") => non_negative_float,
        (CsvType::SalesHistory, "order_date") => iso_datetime,
        (CsvType::SalesHistory, "quantity") => positive_int,
        (CsvType::SalesHistory, "unit_price") => non_negative_float,
        _ => non_empty,
    }
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

fn detect_csv_type(headers: &[String]) -> Option<CsvType> {
    [CsvType::InventorySnapshot, CsvType::SalesHistory]
        .into_iter()
        .find(|t| {
            t.required_columns()
                .iter()
                .all(|c| headers.iter().any(|h| h == c))
        })
}

fn truncate(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((index, _)) => &value[..index],
        None => value,
    }
}

pub fn validate_csv(content: &str, limits: &ImportsConfig) -> Result<Validation, ImportRejection> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut records = reader.records();

    let raw_headers: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|e| ImportRejection::Malformed(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect(),
        None => return Err(ImportRejection::NoHeaders),
    };
    let headers: Vec<String> = raw_headers.iter().map(|h| normalize_header(h)).collect();

    let mut warnings = Vec::new();
    for (raw, normalized) in raw_headers.iter().zip(&headers) {
        if raw != normalized {
            warnings.push(format!(
                "Column '{}' had whitespace/casing differences (normalized to '{}')",
                raw, normalized
            ));
        }
    }

    let csv_type = detect_csv_type(&headers).ok_or_else(|| ImportRejection::UnknownType {
        detected: headers.clone(),
    })?;
    let required = csv_type.required_columns();

    let optional_columns_found: Vec<String> = headers
        .iter()
        .filter(|h| !required.contains(&h.as_str()))
        .cloned()
        .collect();
    for column in &optional_columns_found {
        warnings.push(format!(
            "Column '{}' is not a recognized required column for {} - included as pass-through",
            column, csv_type
        ));
    }

    let mut accepted_rows = Vec::new();
    let mut rejected_rows = Vec::new();
    let mut total_rows = 0;

    for record in records {
        let record = record.map_err(|e| ImportRejection::Malformed(e.to_string()))?;
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if total_rows == limits.max_rows {
            warnings.push(format!(
                "CSV has more than {0} rows. Only the first {0} were processed.",
                limits.max_rows
            ));
            break;
        }
        total_rows += 1;
        let row_number = total_rows + 1;

        let mut row = UploadedRow::new();
        let mut trimmed_reported = false;
        for (header, raw) in headers.iter().zip(record.iter()) {
            if !trimmed_reported && required.contains(&header.as_str()) && raw != raw.trim() {
                warnings.push(format!(
                    "Row {}: trailing/leading whitespace in '{}' was auto-trimmed",
                    row_number, header
                ));
                trimmed_reported = true;
            }
            let value = truncate(raw, limits.max_cell_length).trim();
            row.insert(header.clone(), value.to_string());
        }

        let errors: Vec<String> = required
            .iter()
            .filter_map(|column| {
                let value = row.get(*column).map(String::as_str).unwrap_or("");
                field_check(csv_type, column)(value, *column)
            })
            .collect();

        if errors.is_empty() {
            accepted_rows.push(row);
        } else {
            rejected_rows.push(RejectedRow {
                row_number,
                data: row,
                errors,
            });
        }
    }

    Ok(Validation {
        csv_type,
        detected_columns: headers,
        optional_columns_found,
        accepted_rows,
        rejected_rows,
        warnings,
        total_rows,
    })
}

fn required_message(field: &str) -> String {
    format!("{} is required (empty value)", field)
}

fn non_empty(value: &str, field: &str) -> Option<String> {
    value.trim().is_empty().then(|| required_message(field))
}

fn non_negative_int(value: &str, field: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some(required_message(field));
    }
    match value.parse::<i64>() {
        Ok(n) if n < 0 => Some(format!("{} must be >= 0, got {}", field, n)),
        Ok(_) => None,
        Err(_) => Some(format!("{} must be a non-negative integer, got '{}'", field, value)),
    }
}

fn positive_int(value: &str, field: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some(required_message(field));
    }
    match value.parse::<i64>() {
        Ok(n) if n <= 0 => Some(format!("{} must be > 0, got {}", field, n)),
        Ok(_) => None,
        Err(_) => Some(format!("{} must be a positive integer, got '{}'", field, value)),
    }
}

fn non_negative_float(value: &str, field: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some(required_message(field));
    }
    match value.parse::<f64>() {
        Ok(n) if n < 0.0 => Some(format!("{} must be >= 0, got {:?}", field, n)),
        Ok(_) => None,
        Err(_) => Some(format!("{} must be a non-negative number, got '{}'", field, value)),
    }
}

fn iso_datetime(value: &str, field: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some(required_message(field));
    }
    if is_iso_datetime(value) {
        None
    } else {
        Some(format!("{} must be a valid ISO 8601 datetime, got '{}'", field, value))
    }
}

/// Date, naive date-time, or date-time with offset (`Z` included)
fn is_iso_datetime(value: &str) -> bool {
    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    DateTime::parse_from_rfc3339(value).is_ok()
        || DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M%:z").is_ok()
        || NAIVE_FORMATS
            .iter()
            .any(|f| NaiveDateTime::parse_from_str(value, f).is_ok())
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ImportsConfig {
        ImportsConfig::default()
    }

    #[test]
    fn test_inventory_detection_and_rows() {
        let csv = "sku,name,category,available,unit_cost\n\
                   A1,Tee,Tops,12,8.5\n\
                   B2,,Tops,-3,abc\n";
        let result = validate_csv(csv, &limits()).unwrap();

        assert_eq!(result.csv_type, CsvType::InventorySnapshot);
        assert_eq!(result.total_rows, 2);
        assert_eq!(result.accepted_rows.len(), 1);
        assert_eq!(result.accepted_rows[0]["unit_cost"], "8.5");
        assert!(result.warnings.is_empty());

        let rejected = &result.rejected_rows[0];
        assert_eq!(rejected.row_number, 3);
        assert_eq!(
            rejected.errors,
            vec![
                "name is required (empty value)".to_string(),
                "available must be >= 0, got -3".to_string(),
                "unit_cost must be a non-negative number, got 'abc'".to_string(),
            ]
        );
    }

    #[test]
    fn test_sales_history_checks() {
        let csv = "order_id,order_date,sku,quantity,unit_price\n\
                   O1,2026-01-15T10:30:00Z,A1,2,9.99\n\
                   O2,2026-01-15,A1,1,5\n\
                   O3,15/01/2026,A1,0,-1\n";
        let result = validate_csv(csv, &limits()).unwrap();

        assert_eq!(result.csv_type, CsvType::SalesHistory);
        assert_eq!(result.accepted_rows.len(), 2);
        assert_eq!(
            result.rejected_rows[0].errors,
            vec![
                "order_date must be a valid ISO 8601 datetime, got '15/01/2026'".to_string(),
                "quantity must be > 0, got 0".to_string(),
                "unit_price must be >= 0, got -1.0".to_string(),
            ]
        );
    }

    #[test]
    fn test_header_normalization_and_pass_through() {
        let csv = " SKU ,Name,category,available,unit_cost,Supplier\nA1,Tee,Tops,1,2,Acme\n";
        let result = validate_csv(csv, &limits()).unwrap();

        assert_eq!(
            result.detected_columns,
            vec!["sku", "name", "category", "available", "unit_cost", "supplier"]
        );
        assert_eq!(result.optional_columns_found, vec!["supplier"]);
        assert_eq!(result.accepted_rows[0]["supplier"], "Acme");
        assert_eq!(
            result.warnings,
            vec![
                "Column ' SKU ' had whitespace/casing differences (normalized to 'sku')".to_string(),
                "Column 'Name' had whitespace/casing differences (normalized to 'name')".to_string(),
                "Column 'Supplier' had whitespace/casing differences (normalized to 'supplier')"
                    .to_string(),
                "Column 'supplier' is not a recognized required column for inventory_snapshot - included as pass-through"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_trim_warning_once_per_row() {
        let csv = "sku,name,category,available,unit_cost\n A1 , Tee ,Tops,1,2\n";
        let result = validate_csv(csv, &limits()).unwrap();

        assert_eq!(
            result.warnings,
            vec!["Row 2: trailing/leading whitespace in 'sku' was auto-trimmed".to_string()]
        );
        assert_eq!(result.accepted_rows[0]["sku"], "A1");
        assert_eq!(result.accepted_rows[0]["name"], "Tee");
    }

    #[test]
    fn test_short_row_reports_missing_fields() {
        let csv = "sku,name,category,available,unit_cost\nA1,Tee\n";
        let result = validate_csv(csv, &limits()).unwrap();
        assert_eq!(result.rejected_rows[0].errors.len(), 3);
        assert_eq!(
            result.rejected_rows[0].errors[0],
            "category is required (empty value)"
        );
    }

    #[test]
    fn test_row_cap_and_cell_truncation() {
        let limits = ImportsConfig {
            max_rows: 2,
            max_cell_length: 3,
            ..ImportsConfig::default()
        };
        let csv = "sku,name,category,available,unit_cost\n\
                   A1,Longname,Tops,1,2\nA2,Tee,Tops,1,2\nA3,Tee,Tops,1,2\n";
        let result = validate_csv(csv, &limits).unwrap();

        assert_eq!(result.total_rows, 2);
        assert_eq!(result.accepted_rows.len(), 2);
        assert_eq!(result.accepted_rows[0]["name"], "Lon");
        assert_eq!(
            result.warnings.last().unwrap(),
            "CSV has more than 2 rows. Only the first 2 were processed."
        );
    }

    #[test]
    fn test_rejections() {
        assert_eq!(validate_csv("", &limits()), Err(ImportRejection::NoHeaders));

        let err = validate_csv("a,b\n1,2\n", &limits()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not detect CSV type. Required columns for inventory_snapshot: [sku, name, category, available, unit_cost]. \
             Required columns for sales_history: [order_id, order_date, sku, quantity, unit_price]. Detected columns: [a, b]"
        );
    }

    #[test]
    fn test_iso_datetime_forms() {
        assert!(is_iso_datetime("2026-02-05T03:00:00Z"));
        assert!(is_iso_datetime("2026-02-05T03:00:00+02:00"));
        assert!(is_iso_datetime("2026-02-05 03:00:00"));
        assert!(is_iso_datetime("2026-02-05T03:00"));
        assert!(is_iso_datetime("2026-02-05"));
        assert!(!is_iso_datetime("2026-13-05"));
        assert!(!is_iso_datetime("yesterday"));
    }
}
