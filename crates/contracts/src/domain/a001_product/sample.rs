use super::aggregate::Product;

/// Demo inventory shown before anything has been imported
pub fn sample_products() -> Vec<Product> {
    vec![
        sample("1", "TEE-BLK-M", "Essential Cotton Tee - Black", "Tops", 12, 3, 14, 150, 8.5),
        sample("2", "JNS-IND-32", "Slim Fit Jeans - Indigo", "Bottoms", 8, 2, 21, 75, 24.0),
        sample("3", "HDY-GRY-L", "Oversized Hoodie - Heather Grey", "Outerwear", 5, 4, 18, 100, 18.75),
        sample("4", "DRS-FLR-S", "Floral Midi Dress", "Dresses", 3, 1, 28, 60, 32.0),
        sample("5", "SNK-WHT-10", "Canvas Sneakers - White", "Footwear", 18, 5, 30, 80, 28.5),
        sample("6", "BAG-CAN-TN", "Canvas Tote Bag - Tan", "Accessories", 25, 6, 14, 120, 12.0),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    sku: &str,
    name: &str,
    category: &str,
    available: i64,
    days_until_stockout: u32,
    lead_time_days: u32,
    recommended_qty: u64,
    unit_cost: f64,
) -> Product {
    Product {
        id: id.to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        available,
        days_until_stockout,
        lead_time_days,
        recommended_qty,
        unit_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_set() {
        let products = sample_products();
        assert_eq!(products.len(), 6);
        assert_eq!(products[0].sku, "TEE-BLK-M");
        assert_eq!(products[5].category, "Accessories");
        assert_eq!(products[3].reorder_cost(), 1920.0);
    }
}
