//! defectdb - A strict, file-backed defect ledger for QA harnesses
//!
//! The ledger accepts defect reports from test execution, assigns identity
//! and lifecycle state, persists the record set durably, and derives
//! aggregate severity/status reports.

pub mod ledger;
pub mod model;
pub mod observability;
pub mod report;
pub mod store;

pub use ledger::{DefectLedger, LedgerError, LedgerResult};
pub use model::{DefectRecord, Severity, Status, ValidationError};
pub use report::DefectReport;
pub use store::{JsonFileStore, MemoryStore, RecordStore, StorageError, StorageResult};
