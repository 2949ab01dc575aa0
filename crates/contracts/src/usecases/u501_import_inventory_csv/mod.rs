//! U501: import an inventory snapshot CSV
//!
//! Raw text goes through [`RawTable::parse`], headers are mapped with
//! [`ColumnMap::resolve`] and every row becomes a
//! [`Product`](crate::domain::a001_product::Product) via [`normalize_row`].

pub mod column_map;
pub mod error;
pub mod normalizer;
pub mod preview;
pub mod raw_table;
pub mod response;
pub mod snapshot;

pub use column_map::{ColumnMap, FIELD_ALIASES};
pub use error::ImportError;
pub use normalizer::{normalize_row, normalize_rows};
pub use preview::{PreviewWindow, PREVIEW_CAP, PREVIEW_OPTIONS};
pub use raw_table::RawTable;
pub use response::{CsvType, ImportResult, RejectedRow};
pub use snapshot::{is_csv_filename, UploadedData, SCHEMA_VERSION, SNAPSHOT_SOURCE, STORAGE_KEY};
