use crate::domain::a001_product::{Product, ProductField, ReorderHeuristics, DEFAULT_CATEGORY};

use super::column_map::ColumnMap;

/// Turn one data row into a product. Never fails: missing or malformed
/// cells fall back to defaults.
///
/// `row_index` is the 0-based position among data rows. The synthetic sku
/// is 1-based (`ROW-1`) while the synthetic id is 0-based (`row-0`).
pub fn normalize_row(
    row: &[String],
    row_index: usize,
    columns: &ColumnMap,
    heuristics: &ReorderHeuristics,
) -> Product {
    let sku = non_empty_or(columns.cell(row, ProductField::Sku), || {
        format!("ROW-{}", row_index + 1)
    });
    let name = non_empty_or(columns.cell(row, ProductField::Name), || sku.clone());
    let category = non_empty_or(columns.cell(row, ProductField::Category), || {
        DEFAULT_CATEGORY.to_string()
    });
    let available = parse_integer(columns.cell(row, ProductField::Available)).unwrap_or(0);
    let unit_cost = parse_decimal(columns.cell(row, ProductField::UnitCost)).unwrap_or(0.0);

    let id = if sku.is_empty() {
        format!("row-{}", row_index)
    } else {
        sku.clone()
    };

    Product {
        id,
        sku,
        name,
        category,
        available,
        days_until_stockout: heuristics.days_until_stockout(available),
        lead_time_days: heuristics.lead_time_days,
        recommended_qty: heuristics.recommended_qty(available),
        unit_cost,
    }
}

/// Normalize every row against a column map resolved once from `headers`
pub fn normalize_rows(
    headers: &[String],
    rows: &[Vec<String>],
    heuristics: &ReorderHeuristics,
) -> Vec<Product> {
    let columns = ColumnMap::resolve(headers);
    rows.iter()
        .enumerate()
        .map(|(index, row)| normalize_row(row, index, &columns, heuristics))
        .collect()
}

fn non_empty_or(value: &str, fallback: impl FnOnce() -> String) -> String {
    if value.is_empty() {
        fallback()
    } else {
        value.to_string()
    }
}

/// Leading signed integer, so "12.7" and "12 pcs" both read as 12
fn parse_integer(text: &str) -> Option<i64> {
    let bytes = text.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

/// Leading decimal number ("8.5 USD" reads as 8.5). Non-finite results
/// are rejected.
fn parse_decimal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_at = |from: usize| {
        bytes[from.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_at(end);
    end += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_at(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_at(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn normalize(headers: &[&str], row: &[&str], index: usize) -> Product {
        let columns = ColumnMap::resolve(&strings(headers));
        normalize_row(&strings(row), index, &columns, &ReorderHeuristics::default())
    }

    #[test]
    fn test_full_row() {
        let p = normalize(
            &["sku", "name", "category", "available", "unit_cost"],
            &["TEE-1", " Tee ", "Tops", "12", "8.50"],
            0,
        );
        assert_eq!(p.id, "TEE-1");
        assert_eq!(p.sku, "TEE-1");
        assert_eq!(p.name, "Tee");
        assert_eq!(p.category, "Tops");
        assert_eq!(p.available, 12);
        assert_eq!(p.unit_cost, 8.5);
        assert_eq!(p.days_until_stockout, 7);
        assert_eq!(p.lead_time_days, 14);
        assert_eq!(p.recommended_qty, 38);
    }

    #[test]
    fn test_defaults_for_unmapped_row() {
        let p = normalize(&["foo", "bar", "baz"], &["", "", ""], 2);
        assert_eq!(p.sku, "ROW-3");
        assert_eq!(p.id, "ROW-3");
        assert_eq!(p.name, "ROW-3");
        assert_eq!(p.category, "Uncategorized");
        assert_eq!(p.available, 0);
        assert_eq!(p.unit_cost, 0.0);
        assert_eq!(p.days_until_stockout, 3);
        assert_eq!(p.recommended_qty, 50);
    }

    #[test]
    fn test_name_falls_back_to_sku() {
        let p = normalize(&["sku", "name"], &["A1", "   "], 0);
        assert_eq!(p.name, "A1");
    }

    #[test]
    fn test_short_row() {
        let p = normalize(&["sku", "name", "category", "available"], &["A1"], 4);
        assert_eq!(p.sku, "A1");
        assert_eq!(p.category, "Uncategorized");
        assert_eq!(p.available, 0);
    }

    #[test]
    fn test_threshold_rows() {
        let h = ["sku", "available"];
        let p = normalize(&h, &["A", "5"], 0);
        assert_eq!((p.days_until_stockout, p.recommended_qty), (3, 45));
        let p = normalize(&h, &["A", "6"], 0);
        assert_eq!((p.days_until_stockout, p.recommended_qty), (7, 44));
        let p = normalize(&h, &["A", "50"], 0);
        assert_eq!(p.recommended_qty, 0);
    }

    #[test]
    fn test_negative_available_passes_through() {
        let p = normalize(&["sku", "available"], &["A", "-4"], 0);
        assert_eq!(p.available, -4);
        assert_eq!(p.recommended_qty, 54);
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(parse_integer("12"), Some(12));
        assert_eq!(parse_integer("+7"), Some(7));
        assert_eq!(parse_integer("12.7"), Some(12));
        assert_eq!(parse_integer("12 pcs"), Some(12));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("99999999999999999999999"), None);
    }

    #[test]
    fn test_decimal_coercion() {
        assert_eq!(parse_decimal("8.50"), Some(8.5));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("5."), Some(5.0));
        assert_eq!(parse_decimal("8.5 USD"), Some(8.5));
        assert_eq!(parse_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_decimal("2e"), Some(2.0));
        assert_eq!(parse_decimal("-1.25"), Some(-1.25));
        assert_eq!(parse_decimal("$8.50"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("Infinity"), None);
        assert_eq!(parse_decimal("1e999"), None);
    }

    #[test]
    fn test_normalize_rows_in_order() {
        let products = normalize_rows(
            &strings(&["SKU", "Stock"]),
            &[strings(&["A", "1"]), strings(&["", "70"])],
            &ReorderHeuristics::default(),
        );
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].sku, "A");
        assert_eq!(products[1].sku, "ROW-2");
        assert_eq!(products[1].recommended_qty, 0);
    }
}
