use contracts::domain::a001_product::ReorderHeuristics;
use contracts::projections::p900_reorder_recommendations::Recommendation;

use crate::domain::a001_product::repository::UploadStore;
use crate::domain::a001_product::service as products;

pub async fn list(
    store: &UploadStore,
    heuristics: &ReorderHeuristics,
    at_risk_only: bool,
    limit: usize,
) -> Vec<Recommendation> {
    products::active_products(store, heuristics)
        .await
        .iter()
        .map(Recommendation::from_product)
        .filter(|r| !at_risk_only || r.is_at_risk())
        .take(limit)
        .collect()
}

/// Recommendation for a product id or sku
pub async fn get_by_key(
    store: &UploadStore,
    heuristics: &ReorderHeuristics,
    key: &str,
) -> Option<Recommendation> {
    products::active_products(store, heuristics)
        .await
        .iter()
        .map(Recommendation::from_product)
        .find(|r| r.matches(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_seed_recommendations() {
        let store = UploadStore::default();
        let heuristics = ReorderHeuristics::default();

        let all = list(&store, &heuristics, false, 50).await;
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].id, "rec-1");

        // seed days until stockout: 3, 2, 4, 1, 5, 6
        let at_risk = list(&store, &heuristics, true, 50).await;
        assert_eq!(at_risk.len(), 5);
        assert!(at_risk.iter().all(|r| r.days_left <= 5.0));

        assert_eq!(list(&store, &heuristics, false, 2).await.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_key() {
        let store = UploadStore::default();
        let heuristics = ReorderHeuristics::default();
        let rec = get_by_key(&store, &heuristics, "JNS-IND-32").await.unwrap();
        assert_eq!(rec.product_id, "2");
        assert_eq!(rec.avg_weekly_demand, 18.8);
        assert!(get_by_key(&store, &heuristics, "missing").await.is_none());
    }
}
