//! # Validation Errors
//!
//! Rejections raised at the model boundary before anything touches the
//! store. A failed validation leaves the record set entirely unmodified.

use thiserror::Error;

/// Caller-supplied input that violates the defect data model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Severity string outside the closed set
    #[error("Unknown severity: {0:?} (expected Blocker, Critical, Major, Minor, or Trivial)")]
    UnknownSeverity(String),

    /// Status string outside the closed set
    #[error("Unknown status: {0:?} (expected Open, In Progress, Fixed, Reopened, or Closed)")]
    UnknownStatus(String),

    /// Confidence score outside [0, 1]
    #[error("Confidence {0} out of range (expected a value in [0, 1])")]
    ConfidenceOutOfRange(f64),
}
