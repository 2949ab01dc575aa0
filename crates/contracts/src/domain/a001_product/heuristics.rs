use serde::{Deserialize, Serialize};

/// Placeholder reorder rules used until a forecasting model exists.
///
/// Every field can be overridden from configuration; the defaults are the
/// values the dashboard has always shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderHeuristics {
    /// Stock at or below this level counts as low
    pub low_stock_threshold: i64,
    pub low_stock_days_until_stockout: u32,
    pub default_days_until_stockout: u32,
    pub lead_time_days: u32,
    /// Stock level a reorder should bring a product back up to
    pub target_stock: i64,
    /// Retail price multiple applied to reorder cost
    pub retail_markup: f64,
    /// "Total SKUs" shown while the dashboard runs on sample data
    pub seed_total_skus: u64,
}

impl Default for ReorderHeuristics {
    fn default() -> Self {
        Self {
            low_stock_threshold: 5,
            low_stock_days_until_stockout: 3,
            default_days_until_stockout: 7,
            lead_time_days: 14,
            target_stock: 50,
            retail_markup: 2.5,
            seed_total_skus: 847,
        }
    }
}

impl ReorderHeuristics {
    pub fn days_until_stockout(&self, available: i64) -> u32 {
        if available <= self.low_stock_threshold {
            self.low_stock_days_until_stockout
        } else {
            self.default_days_until_stockout
        }
    }

    pub fn recommended_qty(&self, available: i64) -> u64 {
        self.target_stock.saturating_sub(available).max(0) as u64
    }
}
