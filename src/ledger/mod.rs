//! Defect Ledger subsystem
//!
//! The ledger is the sole owner of store access: it creates records,
//! mutates their status, and answers queries. All invariants of the
//! defect data model are enforced here or below, never by callers.
//!
//! # Design Principles
//!
//! - Every mutation is a full load-modify-save cycle under an exclusive
//!   in-process lock (lost-update protection for parallel test runners)
//! - A failed operation leaves the persisted state intact
//! - An unknown id on update is an explicit error, never a silent no-op

mod defect_ledger;
mod errors;

pub use defect_ledger::DefectLedger;
pub use errors::{LedgerError, LedgerResult};
