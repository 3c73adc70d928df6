//! Record Store subsystem for defectdb
//!
//! The store holds the canonical persistent state of the full defect
//! record set, loaded and saved as a unit.
//!
//! # Design Principles
//!
//! - All-or-nothing: `save` replaces the whole set atomically; readers
//!   never observe a partially written file
//! - First use is not an error: `load` on a missing backing file yields
//!   the empty set
//! - Corruption is never ignored: unparseable backing data is an explicit
//!   failure, never silently treated as empty
//! - The store is injected into the ledger, so tests run against
//!   [`MemoryStore`] and production against [`JsonFileStore`]

mod errors;
mod file;
mod memory;

pub use errors::{StorageError, StorageResult};
pub use file::{JsonFileStore, DEFAULT_STORE_FILE};
pub use memory::MemoryStore;

use crate::model::DefectRecord;

/// Durable, all-or-nothing persistence of the complete record set.
pub trait RecordStore: Send + Sync {
    /// Load the persisted set in storage order.
    ///
    /// Returns the empty set when no backing data exists yet.
    ///
    /// # Errors
    ///
    /// Fails with a [`StorageError`] when backing data exists but cannot
    /// be read or parsed.
    fn load(&self) -> StorageResult<Vec<DefectRecord>>;

    /// Replace the entire persisted set.
    ///
    /// The swap is atomic: on failure the previously persisted state
    /// stays intact.
    fn save(&self, records: &[DefectRecord]) -> StorageResult<()>;
}
