use std::collections::BTreeMap;

use crate::domain::a001_product::ProductField;

/// Accepted header spellings per field, in priority order.
///
/// Headers are compared after trimming and lowercasing.
pub const FIELD_ALIASES: &[(ProductField, &[&str])] = &[
    (ProductField::Sku, &["sku"]),
    (
        ProductField::Name,
        &["name", "product", "product_name", "title"],
    ),
    (ProductField::Category, &["category", "type"]),
    (
        ProductField::Available,
        &["available", "on_hand", "stock", "qty_available"],
    ),
    (ProductField::UnitCost, &["unit_cost", "cost", "unitcost"]),
];

/// Field → zero-based column index for one uploaded file.
///
/// Fields whose aliases are all missing from the header are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: BTreeMap<ProductField, usize>,
}

impl ColumnMap {
    /// For each field take the first alias (by alias priority, not column
    /// position) that matches any header.
    pub fn resolve(headers: &[String]) -> Self {
        let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

        let columns = FIELD_ALIASES
            .iter()
            .filter_map(|(field, aliases)| {
                aliases
                    .iter()
                    .find_map(|alias| normalized.iter().position(|h| h == alias))
                    .map(|index| (*field, index))
            })
            .collect();

        Self { columns }
    }

    pub fn get(&self, field: ProductField) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn mapped_fields(&self) -> Vec<ProductField> {
        self.columns.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Trimmed cell for `field`, or "" when unmapped or past the row end
    pub fn cell<'a>(&self, row: &'a [String], field: ProductField) -> &'a str {
        self.get(field)
            .and_then(|index| row.get(index))
            .map(|cell| cell.trim())
            .unwrap_or("")
    }
}
