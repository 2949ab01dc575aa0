use std::collections::BTreeSet;

use crate::domain::a001_product::Product;

/// Category selector value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Products whose sku or name contains `query` (case-insensitive) and
/// whose category equals `category` exactly, unless it is "all".
/// Order is preserved.
pub fn filter_products(products: &[Product], query: &str, category: &str) -> Vec<Product> {
    let query = query.trim().to_lowercase();

    products
        .iter()
        .filter(|p| {
            query.is_empty()
                || p.sku.to_lowercase().contains(&query)
                || p.name.to_lowercase().contains(&query)
        })
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .cloned()
        .collect()
}

/// "all" followed by the distinct categories, sorted
pub fn category_options(products: &[Product]) -> Vec<String> {
    let distinct: BTreeSet<&str> = products.iter().map(|p| p.category.as_str()).collect();

    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}
