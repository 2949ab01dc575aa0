use serde::{Deserialize, Serialize};

use super::raw_table::RawTable;

/// Local storage key holding the last uploaded file
pub const STORAGE_KEY: &str = "inventorypilot:uploadedRows";

pub const SCHEMA_VERSION: u32 = 1;

/// Value of `source` for snapshots written by the imports page
pub const SNAPSHOT_SOURCE: &str = "imports-page";

/// Parsed upload persisted in the browser between page loads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedData {
    pub schema_version: u32,
    pub source: String,
    pub filename: String,
    /// ISO-8601 timestamp
    pub saved_at: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Row count at upload time, independent of later filtering
    pub total_rows: usize,
}

impl UploadedData {
    pub fn new(filename: impl Into<String>, saved_at: impl Into<String>, table: RawTable) -> Self {
        let total_rows = table.row_count();
        Self {
            schema_version: SCHEMA_VERSION,
            source: SNAPSHOT_SOURCE.to_string(),
            filename: filename.into(),
            saved_at: saved_at.into(),
            headers: table.headers,
            rows: table.rows,
            total_rows,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Read a stored snapshot. Malformed JSON or another schema version
    /// reads as "no data".
    pub fn from_json(raw: &str) -> Option<Self> {
        let snapshot: Self = serde_json::from_str(raw).ok()?;
        (snapshot.schema_version == SCHEMA_VERSION).then_some(snapshot)
    }

    pub fn table(&self) -> RawTable {
        RawTable {
            headers: self.headers.clone(),
            rows: self.rows.clone(),
        }
    }
}

/// Drag-and-drop accepts `.csv` files only
pub fn is_csv_filename(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RawTable {
        RawTable::parse("sku,name,unit_cost\nA1,\"Tee, black\",8.10\nB2,  Jeans ,0.1\n").unwrap()
    }

    #[test]
    fn test_new_counts_rows() {
        let data = UploadedData::new("stock.csv", "2026-02-05T03:00:00Z", table());
        assert_eq!(data.schema_version, 1);
        assert_eq!(data.source, "imports-page");
        assert_eq!(data.total_rows, 2);
    }

    #[test]
    fn test_json_shape() {
        let data = UploadedData::new("stock.csv", "2026-02-05T03:00:00Z", table());
        let value: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();
        assert_eq!(value["schemaVersion"], 1);
        assert_eq!(value["savedAt"], "2026-02-05T03:00:00Z");
        assert_eq!(value["totalRows"], 2);
        assert_eq!(value["rows"][1][1], "  Jeans ");
    }

    #[test]
    fn test_reload_keeps_cell_text() {
        let data = UploadedData::new("stock.csv", "2026-02-05T03:00:00Z", table());
        let reloaded = UploadedData::from_json(&data.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, data);
        assert_eq!(reloaded.table(), table());
    }

    #[test]
    fn test_unreadable_snapshots() {
        assert_eq!(UploadedData::from_json(""), None);
        assert_eq!(UploadedData::from_json("{not json"), None);
        assert_eq!(UploadedData::from_json(r#"{"schemaVersion":1}"#), None);

        let mut data = UploadedData::new("stock.csv", "2026-02-05T03:00:00Z", table());
        data.schema_version = 2;
        assert_eq!(UploadedData::from_json(&data.to_json().unwrap()), None);
    }

    #[test]
    fn test_csv_filename() {
        assert!(is_csv_filename("stock.csv"));
        assert!(is_csv_filename("STOCK.CSV"));
        assert!(!is_csv_filename("stock.xlsx"));
        assert!(!is_csv_filename("csv"));
    }
}
