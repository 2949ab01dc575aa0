use contracts::dashboards::d400_inventory_summary::{DashboardMetrics, DashboardSummary};
use contracts::domain::a001_product::ReorderHeuristics;

use crate::domain::a001_product::repository::UploadStore;
use crate::domain::a001_product::service as products;

/// Metric cards and product table over the active product set
pub async fn get_summary(store: &UploadStore, heuristics: &ReorderHeuristics) -> DashboardSummary {
    let products = products::active_products(store, heuristics).await;
    let total_skus = products::total_skus(store, heuristics).await;
    let metrics = DashboardMetrics::compute(total_skus, &products, heuristics);

    DashboardSummary { metrics, products }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_import_inventory_csv::CsvType;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_seed_summary() {
        let summary = get_summary(&UploadStore::default(), &ReorderHeuristics::default()).await;
        assert_eq!(summary.products.len(), 6);
        assert_eq!(summary.metrics.total_skus, 847);
        assert_eq!(summary.metrics.at_risk_skus, 6);
        assert_eq!(summary.metrics.reorder_cost, 10590.0);
        assert_eq!(summary.metrics.potential_revenue, 26475.0);
    }

    #[tokio::test]
    async fn test_uploaded_summary() {
        let store = UploadStore::default();
        let row = BTreeMap::from([
            ("sku".to_string(), "A1".to_string()),
            ("name".to_string(), "Tee".to_string()),
            ("category".to_string(), "Tops".to_string()),
            ("available".to_string(), "10".to_string()),
            ("unit_cost".to_string(), "2".to_string()),
        ]);
        store.replace(CsvType::InventorySnapshot, vec![row]).await;

        let summary = get_summary(&store, &ReorderHeuristics::default()).await;
        assert_eq!(summary.metrics.total_skus, 1);
        assert_eq!(summary.metrics.reorder_cost, 80.0);
        assert_eq!(summary.metrics.potential_revenue, 200.0);
    }
}
