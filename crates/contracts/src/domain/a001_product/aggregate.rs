use serde::{Deserialize, Serialize};

/// Category assigned when the source row has none
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

// ============================================================================
// Aggregate
// ============================================================================

/// Product with stock on hand and the derived reorder figures.
///
/// Built once per imported row and never mutated afterwards. `id` is unique
/// within a dataset only by convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    /// Stock on hand. Negative values from the source are kept as-is.
    pub available: i64,
    pub days_until_stockout: u32,
    pub lead_time_days: u32,
    pub recommended_qty: u64,
    pub unit_cost: f64,
}

impl Product {
    /// Projected spend to replenish this product
    pub fn reorder_cost(&self) -> f64 {
        self.recommended_qty as f64 * self.unit_cost
    }
}

// ============================================================================
// Schema fields
// ============================================================================

/// Semantic columns an inventory file can be mapped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductField {
    Sku,
    Name,
    Category,
    Available,
    UnitCost,
}

impl ProductField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Sku => "sku",
            ProductField::Name => "name",
            ProductField::Category => "category",
            ProductField::Available => "available",
            ProductField::UnitCost => "unitCost",
        }
    }
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product {
            id: "A1".into(),
            sku: "A1".into(),
            name: "Tee".into(),
            category: "Tops".into(),
            available: 4,
            days_until_stockout: 3,
            lead_time_days: 14,
            recommended_qty: 46,
            unit_cost: 2.5,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["daysUntilStockout"], 3);
        assert_eq!(json["leadTimeDays"], 14);
        assert_eq!(json["recommendedQty"], 46);
        assert_eq!(json["unitCost"], 2.5);
        assert_eq!(product.reorder_cost(), 115.0);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ProductField::UnitCost.as_str(), "unitCost");
        assert_eq!(ProductField::Sku.to_string(), "sku");
    }
}
