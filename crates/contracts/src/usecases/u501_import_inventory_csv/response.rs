use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of CSV recognised by the server-side validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvType {
    InventorySnapshot,
    SalesHistory,
}

impl CsvType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CsvType::InventorySnapshot => "inventory_snapshot",
            CsvType::SalesHistory => "sales_history",
        }
    }

    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            CsvType::InventorySnapshot => &["sku", "name", "category", "available", "unit_cost"],
            CsvType::SalesHistory => &["order_id", "order_date", "sku", "quantity", "unit_price"],
        }
    }
}

impl std::fmt::Display for CsvType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row that failed validation, numbered as in the file (header is row 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedRow {
    pub row_number: usize,
    pub data: BTreeMap<String, String>,
    pub errors: Vec<String>,
}

/// Response of POST /api/v1/imports/upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub csv_type: CsvType,
    pub detected_columns: Vec<String>,
    pub required_columns: Vec<String>,
    pub optional_columns_found: Vec<String>,
    pub total_rows: usize,
    pub accepted_count: usize,
    pub rejected_count: usize,
    pub warnings: Vec<String>,
    pub accepted_preview: Vec<BTreeMap<String, String>>,
    pub rejected_rows: Vec<RejectedRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_type_wire_name() {
        assert_eq!(
            serde_json::to_string(&CsvType::InventorySnapshot).unwrap(),
            "\"inventory_snapshot\""
        );
        assert_eq!(CsvType::SalesHistory.required_columns()[1], "order_date");
    }
}
