//! Persistence service for the theme preference

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read {key:?}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// Key-value persistence capability used by the controller
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and headless rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`. Storage may be disabled by the browser, in which
/// case every call reports [`StorageError::Unavailable`].
#[derive(Debug, Clone)]
pub struct BrowserStore {
    storage: Result<web_sys::Storage, String>,
}

impl BrowserStore {
    pub fn local() -> Self {
        let storage = web_sys::window()
            .ok_or_else(|| "no global `window` exists".to_string())
            .and_then(|window| {
                window
                    .local_storage()
                    .map_err(|e| format!("{e:?}"))?
                    .ok_or_else(|| "localStorage is disabled".to_string())
            });
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_ok()
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage
            .as_ref()
            .map_err(|reason| StorageError::Unavailable(reason.clone()))
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}
