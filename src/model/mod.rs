//! Defect data model
//!
//! The canonical record shape shared by the store, the ledger, and the
//! report aggregator.
//!
//! # Design Principles
//!
//! - Severity and status are closed sum types; a record carrying a value
//!   outside either set cannot be constructed or persisted
//! - `id` and `timestamp` are assigned at creation and never mutated
//! - `updated_at` is set only by status changes, never by creation

mod errors;
mod record;
mod severity;
mod status;

pub use errors::ValidationError;
pub use record::{DefectRecord, REPORTER_TAG};
pub use severity::Severity;
pub use status::Status;
