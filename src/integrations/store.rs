//! Persistence for integration API keys.
//!
//! All keys live in one JSON object keyed by platform id, mirroring what the
//! browser build keeps in local storage under `synapse_integrations`.

use crate::error::StoreError;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

pub const STORAGE_KEY: &str = "synapse_integrations";

pub type KeyMap = BTreeMap<String, String>;

pub trait KeyStore: Send + Sync {
    /// Read the stored map. Missing or unreadable contents yield an empty map.
    fn load(&self) -> KeyMap;

    fn save(&self, keys: &KeyMap) -> Result<(), StoreError>;
}

/// Parse a stored blob, treating anything that is not a string map as empty.
pub fn parse_key_map(raw: &str) -> KeyMap {
    match serde_json::from_str::<KeyMap>(raw) {
        Ok(map) => map,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring corrupt integration key store");
            KeyMap::new()
        }
    }
}

#[derive(Default)]
pub struct MemoryKeyStore {
    blob: Mutex<Option<String>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw blob, as if written by an earlier session.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(raw.into())),
        }
    }
}

impl KeyStore for MemoryKeyStore {
    fn load(&self) -> KeyMap {
        match self.blob.lock() {
            Ok(blob) => blob.as_deref().map(parse_key_map).unwrap_or_default(),
            Err(_) => KeyMap::new(),
        }
    }

    fn save(&self, keys: &KeyMap) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(keys)?;
        let mut blob = self
            .blob
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *blob = Some(serialized);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct FileKeyStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileKeyStore {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyStore for FileKeyStore {
    fn load(&self) -> KeyMap {
        match fs::read_to_string(&self.path) {
            Ok(raw) => parse_key_map(&raw),
            Err(_) => KeyMap::new(),
        }
    }

    fn save(&self, keys: &KeyMap) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(keys)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}
