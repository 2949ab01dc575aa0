use contracts::domain::a001_product::{sample_products, Product, ReorderHeuristics};
use contracts::usecases::u501_import_inventory_csv::{normalize_rows, CsvType};

use super::repository::{UploadStore, UploadedRow};

/// Sort keys accepted by GET /api/v1/products
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    Id,
    Sku,
    Name,
    Category,
}

impl ProductSort {
    /// Unknown keys leave the order untouched
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "id" => Some(Self::Id),
            "sku" => Some(Self::Sku),
            "name" => Some(Self::Name),
            "category" => Some(Self::Category),
            _ => None,
        }
    }

    fn key<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            Self::Id => &product.id,
            Self::Sku => &product.sku,
            Self::Name => &product.name,
            Self::Category => &product.category,
        }
    }
}

/// Uploaded inventory if there is one, otherwise the seed products
pub async fn active_products(store: &UploadStore, heuristics: &ReorderHeuristics) -> Vec<Product> {
    match store.get(CsvType::InventorySnapshot).await {
        Some(rows) => products_from_rows(&rows, heuristics),
        None => sample_products(),
    }
}

/// Uploaded row count, or the seed catalog size
pub async fn total_skus(store: &UploadStore, heuristics: &ReorderHeuristics) -> u64 {
    match store.get(CsvType::InventorySnapshot).await {
        Some(rows) => rows.len() as u64,
        None => heuristics.seed_total_skus,
    }
}

pub async fn list(
    store: &UploadStore,
    heuristics: &ReorderHeuristics,
    sort: Option<ProductSort>,
    limit: usize,
) -> Vec<Product> {
    let mut products = active_products(store, heuristics).await;
    if let Some(sort) = sort {
        products.sort_by(|a, b| sort.key(a).cmp(sort.key(b)));
    }
    products.truncate(limit);
    products
}

/// Find by id or sku
pub async fn get_by_key(
    store: &UploadStore,
    heuristics: &ReorderHeuristics,
    key: &str,
) -> Option<Product> {
    active_products(store, heuristics)
        .await
        .into_iter()
        .find(|p| p.id == key || p.sku == key)
}

/// Run validated inventory rows through the shared row normalizer
fn products_from_rows(rows: &[UploadedRow], heuristics: &ReorderHeuristics) -> Vec<Product> {
    let headers: Vec<String> = CsvType::InventorySnapshot
        .required_columns()
        .iter()
        .map(|c| c.to_string())
        .collect();

    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|h| row.get(h).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    normalize_rows(&headers, &table, heuristics)
}
