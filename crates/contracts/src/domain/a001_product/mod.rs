pub mod aggregate;
pub mod heuristics;
pub mod sample;

pub use aggregate::{Product, ProductField, DEFAULT_CATEGORY};
pub use heuristics::ReorderHeuristics;
pub use sample::sample_products;
