//! Durable snapshot storage
//!
//! Full-overwrite persistence of the board list under a fixed storage key.
//! Writes are never incremental: every save replaces the whole record.

use cork_common::Board;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Fixed name the durable record is stored under
pub const STORAGE_KEY: &str = "board-storage";

/// Schema version written into every record. Exists for future migration;
/// no migration logic lives here.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors from the durable store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// The durable record: schema version plus the full board list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub version: u32,
    pub boards: Vec<Board>,
}

impl BoardRecord {
    pub fn new(boards: Vec<Board>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            boards,
        }
    }
}

/// Durable snapshot backend behind the engine.
///
/// Implementations must treat every save as a full overwrite of whatever
/// was stored before.
pub trait SnapshotStore: Send {
    /// Load the stored record; `None` when nothing has been written yet
    fn load(&self) -> Result<Option<BoardRecord>>;

    /// Overwrite the stored record
    fn save(&self, record: &BoardRecord) -> Result<()>;
}

/// JSON file-backed store at `<dir>/board-storage.json`
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(format!("{}.json", STORAGE_KEY)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<BoardRecord>> {
        if !self.path.exists() {
            tracing::debug!("No stored record at {:?}, starting fresh", self.path);
            return Ok(None);
        }

        let data = fs::read(&self.path)?;
        let record: BoardRecord = serde_json::from_slice(&data)?;
        if record.version != SCHEMA_VERSION {
            tracing::warn!(
                "Stored record has schema version {} (current is {})",
                record.version,
                SCHEMA_VERSION
            );
        }
        Ok(Some(record))
    }

    fn save(&self, record: &BoardRecord) -> Result<()> {
        let data = serde_json::to_vec_pretty(record)?;
        fs::write(&self.path, data)?;
        tracing::debug!("Saved {} boards to {:?}", record.boards.len(), self.path);
        Ok(())
    }
}

/// In-memory store for tests and embedders without a filesystem
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Mutex<Option<BoardRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<BoardRecord>> {
        let guard = self.record.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, record: &BoardRecord) -> Result<()> {
        let mut guard = self.record.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(record.clone());
        Ok(())
    }
}
