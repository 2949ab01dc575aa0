pub mod a001_product;
pub mod d400_inventory_summary;
pub mod p900_reorder_recommendations;
pub mod u501_import_inventory_csv;
pub mod u502_run_forecast;

use crate::shared::error::AppError;

pub const DEFAULT_LIMIT: usize = 50;
pub const MAX_LIMIT: usize = 500;

/// `limit` query parameter: absent means the default, otherwise 1..=500
pub fn check_limit(limit: Option<i64>) -> Result<usize, AppError> {
    match limit {
        None => Ok(DEFAULT_LIMIT),
        Some(n) if (1..=MAX_LIMIT as i64).contains(&n) => Ok(n as usize),
        Some(n) => {
            tracing::warn!("Rejected limit={}", n);
            Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, n
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_limit() {
        assert_eq!(check_limit(None).unwrap(), 50);
        assert_eq!(check_limit(Some(1)).unwrap(), 1);
        assert_eq!(check_limit(Some(500)).unwrap(), 500);
        assert!(check_limit(Some(0)).is_err());
        assert!(check_limit(Some(501)).is_err());
    }
}
