use contracts::usecases::u501_import_inventory_csv::CsvType;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

/// Validated row keyed by normalized header
pub type UploadedRow = BTreeMap<String, String>;

/// In-memory store for the last accepted upload of each CSV type.
///
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct UploadStore {
    rows: RwLock<HashMap<CsvType, Vec<UploadedRow>>>,
}

static UPLOAD_STORE: Lazy<UploadStore> = Lazy::new(UploadStore::default);

/// Process-wide store used by the HTTP handlers
pub fn store() -> &'static UploadStore {
    &UPLOAD_STORE
}

impl UploadStore {
    /// Replace the previous upload of the same type
    pub async fn replace(&self, csv_type: CsvType, rows: Vec<UploadedRow>) {
        self.rows.write().await.insert(csv_type, rows);
    }

    /// Rows of the last upload, or None if nothing (or nothing valid) was uploaded
    pub async fn get(&self, csv_type: CsvType) -> Option<Vec<UploadedRow>> {
        self.rows
            .read()
            .await
            .get(&csv_type)
            .filter(|rows| !rows.is_empty())
            .cloned()
    }

    pub async fn clear(&self) {
        self.rows.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sku: &str) -> UploadedRow {
        BTreeMap::from([("sku".to_string(), sku.to_string())])
    }

    #[tokio::test]
    async fn test_replace_and_get() {
        let store = UploadStore::default();
        assert!(store.get(CsvType::InventorySnapshot).await.is_none());

        store.replace(CsvType::InventorySnapshot, vec![row("A1")]).await;
        store.replace(CsvType::InventorySnapshot, vec![row("B2"), row("C3")]).await;

        let rows = store.get(CsvType::InventorySnapshot).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["sku"], "B2");
        assert!(store.get(CsvType::SalesHistory).await.is_none());
    }

    #[tokio::test]
    async fn test_empty_upload_reads_as_none() {
        let store = UploadStore::default();
        store.replace(CsvType::InventorySnapshot, Vec::new()).await;
        assert!(store.get(CsvType::InventorySnapshot).await.is_none());

        store.replace(CsvType::InventorySnapshot, vec![row("A1")]).await;
        store.clear().await;
        assert!(store.get(CsvType::InventorySnapshot).await.is_none());
    }
}
