//! Observability subsystem for defectdb
//!
//! Structured JSON event logging for ledger operations.
//!
//! # Principles
//!
//! 1. Observability is read-only; no side effects on ledger state
//! 2. Synchronous, no buffering, no background threads
//! 3. Deterministic output (one line per event, sorted field order)
//!
//! # Usage
//!
//! ```ignore
//! use defectdb::observability::{Event, Logger};
//!
//! Logger::info(Event::DefectLogged.as_str(), &[("severity", "Major")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{LogLevel, Logger};
