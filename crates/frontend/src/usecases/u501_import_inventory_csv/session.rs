use contracts::usecases::u501_import_inventory_csv::{ImportError, RawTable, UploadedData};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::shared::storage::{save_snapshot, KeyValueStore};

/// Generation counter for the upload widget.
///
/// Every new upload takes a ticket; a read that finishes after a newer
/// upload began holds an outdated ticket and its result is dropped.
#[derive(Debug, Clone, Default)]
pub struct UploadSession {
    generation: Arc<AtomicU64>,
}

/// Identifies one upload within its session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// A newer upload started before this one finished
    Stale,
    Failed(ImportError),
    Loaded {
        table: RawTable,
        /// Set when the snapshot was written to storage
        saved_at: Option<String>,
        storage_warning: Option<ImportError>,
    },
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an upload, invalidating any that is still in flight
    pub fn begin(&self) -> UploadTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        UploadTicket { generation }
    }

    pub fn is_current(&self, ticket: &UploadTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Finish an upload once its file read has resolved: parse the text and
    /// persist the snapshot. A storage failure is reported alongside the
    /// parsed table instead of replacing it.
    pub fn complete(
        &self,
        ticket: UploadTicket,
        filename: &str,
        read_result: Result<String, ImportError>,
        saved_at: &str,
        store: &mut impl KeyValueStore,
    ) -> UploadOutcome {
        if !self.is_current(&ticket) {
            log::debug!("Discarding stale read of '{}'", filename);
            return UploadOutcome::Stale;
        }

        let table = match read_result.and_then(|text| RawTable::parse(&text)) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("Import of '{}' failed: {:?}", filename, e);
                return UploadOutcome::Failed(e);
            }
        };

        let snapshot = UploadedData::new(filename, saved_at, table.clone());
        match save_snapshot(store, &snapshot) {
            Ok(()) => UploadOutcome::Loaded {
                table,
                saved_at: Some(saved_at.to_string()),
                storage_warning: None,
            },
            Err(e) => {
                log::warn!("Snapshot of '{}' not saved: {:?}", filename, e);
                UploadOutcome::Loaded {
                    table,
                    saved_at: None,
                    storage_warning: Some(e),
                }
            }
        }
    }
}
