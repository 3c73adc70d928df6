//! In-memory record store for unit tests
//!
//! Same contract as the file store minus durability: `save` swaps the
//! whole set under a mutex, so readers see either the old set or the new
//! one.

use std::sync::{Arc, Mutex};

use crate::model::DefectRecord;

use super::errors::StorageResult;
use super::RecordStore;

/// In-memory record store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<DefectRecord>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> StorageResult<Vec<DefectRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }

    fn save(&self, records: &[DefectRecord]) -> StorageResult<()> {
        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }
}
