pub mod builder;
pub mod dto;
pub mod filter;

pub use builder::{build_dataset, Dataset};
pub use dto::{DashboardMetrics, DashboardSummary};
pub use filter::{category_options, filter_products, ALL_CATEGORIES};
