pub mod response;

pub use response::{ForecastRun, ForecastTriggerResponse};
