//! Persistence collaborators for the record list.
//!
//! The whole list lives under a single key: it is read in full when a store
//! opens and overwritten in full after every mutation. There is no schema
//! versioning and no migration path.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::record::Record;

/// Errors from a backing read or write.
#[derive(Debug, Error)]
pub enum BackingError {
    #[error("failed to access record list: {0}")]
    Io(#[from] std::io::Error),

    #[error("record list is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type BackingResult<T> = Result<T, BackingError>;

/// Storage collaborator holding the full record list.
///
/// Implementations don't need to be Sync; the store owns its backing and all
/// mutation happens from one logical writer.
pub trait RecordBacking: Send {
    /// Read the full list. A missing document reads as an empty list;
    /// malformed content is an error the caller degrades on.
    ///
    /// # Errors
    /// Returns [`BackingError`] when the document exists but cannot be read
    /// or parsed.
    fn read(&self) -> BackingResult<Vec<Record>>;

    /// Overwrite the full list.
    ///
    /// # Errors
    /// Returns [`BackingError`] when the document cannot be written.
    fn write(&self, records: &[Record]) -> BackingResult<()>;
}

/// A single JSON file holding the serialized record array.
#[derive(Debug)]
pub struct JsonFileBacking {
    path: PathBuf,
}

impl JsonFileBacking {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordBacking for JsonFileBacking {
    fn read(&self) -> BackingResult<Vec<Record>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn write(&self, records: &[Record]) -> BackingResult<()> {
        let raw = serde_json::to_string(records)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory list, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBacking {
    records: Mutex<Vec<Record>>,
}

impl RecordBacking for MemoryBacking {
    fn read(&self) -> BackingResult<Vec<Record>> {
        Ok(self.records.lock().clone())
    }

    fn write(&self, records: &[Record]) -> BackingResult<()> {
        *self.records.lock() = records.to_vec();
        Ok(())
    }
}

// Lets a test keep a handle on the backing a store owns.
impl RecordBacking for Arc<MemoryBacking> {
    fn read(&self) -> BackingResult<Vec<Record>> {
        self.as_ref().read()
    }

    fn write(&self, records: &[Record]) -> BackingResult<()> {
        self.as_ref().write(records)
    }
}
