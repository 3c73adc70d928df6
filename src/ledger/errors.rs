//! # Ledger Errors
//!
//! The three failure kinds surfaced to callers. All are distinguishable;
//! none are swallowed or downgraded to a log line.

use thiserror::Error;

use crate::model::ValidationError;
use crate::store::StorageError;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failures of ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Caller input violated the defect data model
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A status update referenced an id absent from the store
    #[error("No defect with id {id}")]
    NotFound {
        /// The id the caller asked for
        id: String,
    },

    /// The backing store failed; the prior persisted state is intact
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LedgerError {
    /// Returns whether this failure was caused by caller input
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            LedgerError::Validation(_) | LedgerError::NotFound { .. }
        )
    }
}
