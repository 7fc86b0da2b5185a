//! In-memory ordered record list, synchronized to a backing store on every
//! mutation.

use thiserror::Error;

use crate::backing::RecordBacking;
use crate::record::Record;

/// Errors from store operations that address a record by index.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The unfiltered index does not name a record.
    #[error("no record at index {0}")]
    NotFound(usize),
}

/// Ordered list of records, newest first, persisted after every mutation.
///
/// Indices are positions in the unfiltered list, not in any filtered view.
/// Persistence writes are best-effort: a failed write is logged and the
/// in-memory list stays authoritative for the rest of the session.
pub struct RecordStore {
    records: Vec<Record>,
    backing: Box<dyn RecordBacking>,
}

impl RecordStore {
    /// Open a store over `backing` and load whatever it holds.
    pub fn open(backing: Box<dyn RecordBacking>) -> Self {
        let mut store = Self { records: Vec::new(), backing };
        store.load();
        store
    }

    /// Re-read the full list from the backing store.
    ///
    /// Unreadable or malformed content degrades to an empty list; the
    /// failure is logged and not propagated.
    pub fn load(&mut self) {
        self.records = match self.backing.read() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("failed to load records, starting empty: {e}");
                Vec::new()
            }
        };
    }

    /// Prepend a record, then persist the full list.
    pub fn add(&mut self, record: Record) {
        self.records.insert(0, record);
        self.persist();
    }

    /// Replace the record at `index` wholesale, then persist.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] when `index` is out of range.
    pub fn update(&mut self, index: usize, record: Record) -> Result<(), RegistryError> {
        let slot = self.records.get_mut(index).ok_or(RegistryError::NotFound(index))?;
        *slot = record;
        self.persist();
        Ok(())
    }

    /// Remove and return the record at `index`, then persist.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] when `index` is out of range.
    pub fn delete(&mut self, index: usize) -> Result<Record, RegistryError> {
        if index >= self.records.len() {
            return Err(RegistryError::NotFound(index));
        }
        let removed = self.records.remove(index);
        self.persist();
        Ok(removed)
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// The current ordered list, read-only.
    pub fn snapshot(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.backing.write(&self.records) {
            tracing::warn!("failed to persist records: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use std::sync::Arc;

    use chrono::Utc;
    use tempfile::tempdir;

    use super::*;
    use crate::backing::{JsonFileBacking, MemoryBacking};

    fn sample(name: &str) -> Record {
        Record {
            name: name.to_string(),
            student_id: "1023".to_string(),
            email: "ann@x.com".to_string(),
            contact: "9876543210".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut store = RecordStore::open(Box::new(MemoryBacking::default()));
        store.add(sample("First"));
        store.add(sample("Second"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot()[0].name, "Second");
        assert_eq!(store.snapshot()[1].name, "First");
    }

    #[test]
    fn every_mutation_is_persisted() {
        let backing = Arc::new(MemoryBacking::default());
        let mut store = RecordStore::open(Box::new(Arc::clone(&backing)));

        store.add(sample("Ann"));
        assert_eq!(backing.read().unwrap().len(), 1);

        store.update(0, sample("Bea")).unwrap();
        assert_eq!(backing.read().unwrap()[0].name, "Bea");

        store.delete(0).unwrap();
        assert!(backing.read().unwrap().is_empty());
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = RecordStore::open(Box::new(MemoryBacking::default()));
        store.add(sample("First"));
        store.add(sample("Second"));

        store.update(1, sample("Replacement")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot()[0].name, "Second");
        assert_eq!(store.snapshot()[1].name, "Replacement");
    }

    #[test]
    fn update_out_of_range_is_not_found() {
        let mut store = RecordStore::open(Box::new(MemoryBacking::default()));
        let result = store.update(0, sample("Ghost"));
        assert!(matches!(result, Err(RegistryError::NotFound(0))));
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = RecordStore::open(Box::new(MemoryBacking::default()));
        store.add(sample("First"));
        store.add(sample("Second"));
        store.add(sample("Third"));

        let removed = store.delete(1).unwrap();
        assert_eq!(removed.name, "Second");
        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot()[0].name, "Third");
        assert_eq!(store.snapshot()[1].name, "First");
    }

    #[test]
    fn delete_out_of_range_is_not_found() {
        let mut store = RecordStore::open(Box::new(MemoryBacking::default()));
        assert!(matches!(store.delete(5), Err(RegistryError::NotFound(5))));
    }

    #[test]
    fn open_reads_persisted_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");

        {
            let mut store = RecordStore::open(Box::new(JsonFileBacking::new(&path)));
            store.add(sample("Ann"));
        }

        let reopened = RecordStore::open(Box::new(JsonFileBacking::new(&path)));
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.snapshot()[0].name, "Ann");
    }

    #[test]
    fn malformed_backing_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, "{ definitely not a record list").unwrap();

        let store = RecordStore::open(Box::new(JsonFileBacking::new(&path)));
        assert!(store.is_empty());
    }
}
