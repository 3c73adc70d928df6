//! Defect lifecycle manager
//!
//! Mutations hold `write_lock` across the whole load-modify-save cycle;
//! two concurrent `log_defect` calls serialize and both land. Reads go
//! straight to the store, which only ever exposes atomically swapped
//! snapshots.

use std::sync::{Arc, Mutex};

use crate::model::{DefectRecord, Severity, Status};
use crate::observability::{Event, Logger};
use crate::report::DefectReport;
use crate::store::{JsonFileStore, RecordStore, StorageError};

use super::errors::{LedgerError, LedgerResult};

/// Owner of defect creation, mutation, and querying.
///
/// The store is injected: unit tests run against
/// [`MemoryStore`](crate::store::MemoryStore), production against
/// [`JsonFileStore`].
pub struct DefectLedger {
    /// Backing record store; all reads and writes go through here
    store: Arc<dyn RecordStore>,
    /// Serializes mutating load-modify-save cycles
    write_lock: Mutex<()>,
}

impl DefectLedger {
    /// Create a ledger over the given store.
    pub fn new<S: RecordStore + 'static>(store: S) -> Self {
        Self::with_store(Arc::new(store))
    }

    /// Create a ledger over a shared store handle.
    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a ledger backed by `defects_log.json` in the working
    /// directory, matching the harness default.
    pub fn default_location() -> Self {
        Self::new(JsonFileStore::default_location())
    }

    /// Record a new defect and return its id.
    ///
    /// The record starts at `Open` with a fresh UUIDv4 id and no
    /// `updated_at`. Validation failures leave the store unmodified.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Validation`] if `confidence` falls outside [0, 1]
    /// - [`LedgerError::Storage`] if the record set cannot be loaded or
    ///   saved; no record is appended in that case
    pub fn log_defect(
        &self,
        test_name: &str,
        error: &str,
        confidence: Option<f64>,
        severity: Severity,
    ) -> LedgerResult<String> {
        // Validate before touching the store
        let record = DefectRecord::new(test_name, error, confidence, severity).map_err(|e| {
            Logger::warn(
                Event::ValidationRejected.as_str(),
                &[("reason", &e.to_string()), ("test_name", test_name)],
            );
            LedgerError::from(e)
        })?;
        let id = record.id.clone();

        let _guard = self.write_lock.lock().unwrap();
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)?;

        Logger::info(
            Event::DefectLogged.as_str(),
            &[
                ("id", &id),
                ("severity", severity.as_str()),
                ("test_name", test_name),
            ],
        );
        Ok(id)
    }

    /// Every record with `status == Open`, in store order.
    pub fn get_open_defects(&self) -> LedgerResult<Vec<DefectRecord>> {
        let records = self.load()?;
        Ok(records.into_iter().filter(DefectRecord::is_open).collect())
    }

    /// The full record set, in store order.
    pub fn all_defects(&self) -> LedgerResult<Vec<DefectRecord>> {
        self.load().map_err(LedgerError::from)
    }

    /// Move the defect with the given id to a new lifecycle status.
    ///
    /// Sets `updated_at` on the targeted record; every other record and
    /// every other field stay untouched.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotFound`] if no record has this id; the store is
    ///   left byte-for-byte unchanged
    /// - [`LedgerError::Storage`] on load/save failure
    pub fn update_defect_status(&self, id: &str, status: Status) -> LedgerResult<()> {
        let _guard = self.write_lock.lock().unwrap();
        let mut records = self.load()?;

        let record = records.iter_mut().find(|r| r.id == id).ok_or_else(|| {
            Logger::warn(Event::DefectNotFound.as_str(), &[("id", id)]);
            LedgerError::NotFound { id: id.to_string() }
        })?;

        record.set_status(status);
        self.save(&records)?;

        Logger::info(
            Event::DefectStatusUpdated.as_str(),
            &[("id", id), ("status", status.as_str())],
        );
        Ok(())
    }

    /// Aggregate severity/status counts over the current record set.
    pub fn get_defect_report(&self) -> LedgerResult<DefectReport> {
        let records = self.load()?;
        let report = DefectReport::compute(&records);

        Logger::trace(
            Event::ReportComputed.as_str(),
            &[("total_defects", &report.total_defects.to_string())],
        );
        Ok(report)
    }

    fn load(&self) -> Result<Vec<DefectRecord>, StorageError> {
        self.store.load().map_err(|e| {
            Logger::error(Event::StoreLoadFailed.as_str(), &[("code", e.code())]);
            e
        })
    }

    fn save(&self, records: &[DefectRecord]) -> Result<(), StorageError> {
        self.store.save(records).map_err(|e| {
            Logger::error(Event::StoreSaveFailed.as_str(), &[("code", e.code())]);
            e
        })
    }
}
