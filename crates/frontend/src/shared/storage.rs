use contracts::usecases::u501_import_inventory_csv::{ImportError, UploadedData, STORAGE_KEY};
use std::collections::HashMap;
use web_sys::window;

/// String key-value persistence (the browser's localStorage, or memory in tests)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Fails when the value cannot be stored, e.g. quota exceeded
    fn set(&mut self, key: &str, value: &str) -> Result<(), String>;

    fn remove(&mut self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("{:?}", e))
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store with an optional size quota in bytes
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: HashMap::new(),
            quota: Some(quota),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(format!("quota of {} bytes exceeded", quota));
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// Last imported snapshot. Missing, malformed or outdated data reads as None.
pub fn load_snapshot(store: &impl KeyValueStore) -> Option<UploadedData> {
    let raw = store.get(STORAGE_KEY)?;
    let data = UploadedData::from_json(&raw);
    if data.is_none() {
        log::warn!("Ignoring unreadable snapshot under '{}'", STORAGE_KEY);
    }
    data
}

pub fn save_snapshot(store: &mut impl KeyValueStore, data: &UploadedData) -> Result<(), ImportError> {
    let json = data
        .to_json()
        .map_err(|e| ImportError::StorageWriteFailure(e.to_string()))?;
    store
        .set(STORAGE_KEY, &json)
        .map_err(ImportError::StorageWriteFailure)
}

/// Forget the imported snapshot so the dashboard shows sample data again
pub fn clear_snapshot(store: &mut impl KeyValueStore) {
    store.remove(STORAGE_KEY);
}
