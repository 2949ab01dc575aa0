use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a001_product::Product;

/// `at_risk=true` keeps recommendations with at most this many days left
pub const AT_RISK_DAYS_LEFT: f64 = 5.0;

const SAFETY_STOCK_WEEKS: f64 = 1.5;
const METHOD: &str = "placeholder_heuristic";

/// Reorder recommendation for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub product_id: String,
    pub sku: String,
    pub name: String,
    pub avg_weekly_demand: f64,
    pub lead_time_demand: f64,
    pub safety_stock: f64,
    pub reorder_point: f64,
    pub recommended_order_qty: u64,
    pub days_left: f64,
    pub unit_cost: f64,
    pub explanation: BTreeMap<String, String>,
}

impl Recommendation {
    /// Derive demand figures from the product's own reorder quantity.
    /// Weekly demand is assumed to be a quarter of it.
    pub fn from_product(product: &Product) -> Self {
        let avg_weekly_demand = round1(product.recommended_qty as f64 / 4.0);
        let lead_time_demand = round1(avg_weekly_demand * (product.lead_time_days as f64 / 7.0));
        let safety_stock = round1(avg_weekly_demand * SAFETY_STOCK_WEEKS);
        let reorder_point = round1(lead_time_demand + safety_stock);

        let mut explanation = BTreeMap::new();
        explanation.insert(
            "summary".to_string(),
            format!(
                "{} has {} units on hand with ~{} days until stockout. Lead time is {} days.",
                product.name, product.available, product.days_until_stockout, product.lead_time_days
            ),
        );
        explanation.insert("method".to_string(), METHOD.to_string());

        Self {
            id: format!("rec-{}", product.id),
            product_id: product.id.clone(),
            sku: product.sku.clone(),
            name: product.name.clone(),
            avg_weekly_demand,
            lead_time_demand,
            safety_stock,
            reorder_point,
            recommended_order_qty: product.recommended_qty,
            days_left: product.days_until_stockout as f64,
            unit_cost: product.unit_cost,
            explanation,
        }
    }

    pub fn is_at_risk(&self) -> bool {
        self.days_left <= AT_RISK_DAYS_LEFT
    }

    /// Lookup key accepted by the API: product id or sku
    pub fn matches(&self, key: &str) -> bool {
        self.product_id == key || self.sku == key
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
