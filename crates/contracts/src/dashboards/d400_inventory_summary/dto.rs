use serde::{Deserialize, Serialize};

use crate::domain::a001_product::{Product, ReorderHeuristics};

/// Metric cards at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_skus: u64,
    pub at_risk_skus: u64,
    pub reorder_cost: f64,
    pub potential_revenue: f64,
}

impl DashboardMetrics {
    /// Sums over the whole active product set, never a filtered view
    pub fn compute(total_skus: u64, products: &[Product], heuristics: &ReorderHeuristics) -> Self {
        let reorder_cost: f64 = products.iter().map(Product::reorder_cost).sum();
        let potential_revenue: f64 = products
            .iter()
            .map(|p| p.reorder_cost() * heuristics.retail_markup)
            .sum();

        Self {
            total_skus,
            at_risk_skus: products.len() as u64,
            reorder_cost,
            potential_revenue,
        }
    }
}

/// Response of GET /api/v1/dashboard/summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub metrics: DashboardMetrics,
    pub products: Vec<Product>,
}
