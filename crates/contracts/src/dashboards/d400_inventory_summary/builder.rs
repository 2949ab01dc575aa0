use crate::domain::a001_product::{sample_products, Product, ReorderHeuristics};
use crate::usecases::u501_import_inventory_csv::{normalize_rows, UploadedData};

use super::dto::{DashboardMetrics, DashboardSummary};

/// Active product set with its metrics
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub products: Vec<Product>,
    pub metrics: DashboardMetrics,
}

impl Dataset {
    pub fn into_summary(self) -> DashboardSummary {
        DashboardSummary {
            metrics: self.metrics,
            products: self.products,
        }
    }
}

/// Build the dashboard data from the stored upload, or from the sample set
/// when there is none. Pure: reading the snapshot is up to the caller.
pub fn build_dataset(snapshot: Option<&UploadedData>, heuristics: &ReorderHeuristics) -> Dataset {
    let (products, total_skus) = match snapshot {
        Some(data) => (
            normalize_rows(&data.headers, &data.rows, heuristics),
            data.total_rows as u64,
        ),
        None => (sample_products(), heuristics.seed_total_skus),
    };

    let metrics = DashboardMetrics::compute(total_skus, &products, heuristics);
    Dataset { products, metrics }
}
