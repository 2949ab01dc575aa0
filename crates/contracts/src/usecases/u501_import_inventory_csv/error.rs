use thiserror::Error;

/// Failures of the CSV import pipeline.
///
/// `Display` is the message shown to the user; the payloads carry the
/// underlying diagnostic for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("CSV file is empty.")]
    EmptyFile,

    #[error("Failed to parse CSV: {0}")]
    ParseError(String),

    #[error("Failed to read file.")]
    ReadFailure(String),

    #[error("Could not save to local storage (file may be too large).")]
    StorageWriteFailure(String),
}

impl ImportError {
    /// Storage failures are warnings: the parsed preview is still shown
    pub fn is_warning(&self) -> bool {
        matches!(self, ImportError::StorageWriteFailure(_))
    }
}
