pub mod dto;

pub use dto::{Recommendation, AT_RISK_DAYS_LEFT};
