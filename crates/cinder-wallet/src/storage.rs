//! Wallet persistence collaborators.
//!
//! The wallet core never reads files itself. It asks a [`WalletStore`] for a
//! [`WalletRecord`] (raw metadata plus raw entries) and validates what comes
//! back. Two stores are provided:
//! - [`FileStore`]: JSON `.wlt` files on disk
//! - [`MemoryStore`]: in-process map, for tests and embedding
//!
//! # File format
//! ```text
//! {
//!   "meta": { "coin": "cinder", "type": "deterministic", ... },
//!   "entries": [ { "address": "...", "public_key": "<hex>", "secret_key": "<hex>" } ]
//! }
//! ```

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::WalletError;
use crate::meta::Meta;

/// An entry as stored, before address and key decoding.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    pub address: String,
    pub public_key: String,
    pub secret_key: String,
}

/// A wallet as stored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletRecord {
    pub meta: Meta,
    #[serde(default)]
    pub entries: Vec<RawEntry>,
}

/// Source and sink of wallet records.
pub trait WalletStore: Send + Sync {
    /// Read the record at `path`. Missing records are [`WalletError::NotFound`]
    /// naming `path`.
    fn read_wallet(&self, path: &Path) -> Result<WalletRecord, WalletError>;

    /// Write `record` to `path`, replacing any previous record.
    fn write_wallet(&self, path: &Path, record: &WalletRecord) -> Result<(), WalletError>;
}

/// JSON files on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl WalletStore for FileStore {
    fn read_wallet(&self, path: &Path) -> Result<WalletRecord, WalletError> {
        let data = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WalletError::NotFound {
                name: path.display().to_string(),
            },
            _ => WalletError::Io(e.to_string()),
        })?;

        serde_json::from_slice(&data).map_err(|e| {
            WalletError::Serialization(format!("{}: {e}", path.display()))
        })
    }

    fn write_wallet(&self, path: &Path, record: &WalletRecord) -> Result<(), WalletError> {
        let data = serde_json::to_vec_pretty(record)
            .map_err(|e| WalletError::Serialization(e.to_string()))?;
        std::fs::write(path, data).map_err(|e| WalletError::Io(e.to_string()))
    }
}

/// In-memory store keyed by path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<PathBuf, WalletRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl WalletStore for MemoryStore {
    fn read_wallet(&self, path: &Path) -> Result<WalletRecord, WalletError> {
        self.records
            .lock()
            .get(path)
            .cloned()
            .ok_or_else(|| WalletError::NotFound {
                name: path.display().to_string(),
            })
    }

    fn write_wallet(&self, path: &Path, record: &WalletRecord) -> Result<(), WalletError> {
        self.records.lock().insert(path.to_path_buf(), record.clone());
        Ok(())
    }
}
