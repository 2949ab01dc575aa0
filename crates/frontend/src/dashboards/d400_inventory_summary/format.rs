//! Display formatting for the dashboard (en-US style)

/// Group digits by thousands: 26475 -> "26,475"
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// "$26,475" or, with decimals, "$1,275.00"
pub fn format_money(amount: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };
    let grouped = format_thousands(whole.parse().unwrap_or(0));
    let sign = if amount < 0.0 { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}${}.{}", sign, grouped, fraction),
        None => format!("{}${}", sign, grouped),
    }
}

/// Badge style for days until stockout
pub fn urgency_class(days_until_stockout: u32) -> &'static str {
    match days_until_stockout {
        0..=2 => "badge badge--critical",
        3..=4 => "badge badge--warning",
        _ => "badge badge--ok",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(847), "847");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(26475.0, 0), "$26,475");
        assert_eq!(format_money(10590.4, 0), "$10,590");
        assert_eq!(format_money(1275.0, 2), "$1,275.00");
        assert_eq!(format_money(0.5, 2), "$0.50");
        assert_eq!(format_money(-12.0, 0), "-$12");
    }

    #[test]
    fn test_urgency_class() {
        assert_eq!(urgency_class(1), "badge badge--critical");
        assert_eq!(urgency_class(4), "badge badge--warning");
        assert_eq!(urgency_class(7), "badge badge--ok");
    }
}
