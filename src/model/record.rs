//! # Defect Record
//!
//! One reported defect. Records are created by the ledger on test failure,
//! mutated only through [`DefectRecord::set_status`], and never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ValidationError;
use super::severity::Severity;
use super::status::Status;

/// Provenance tag stamped on every record created by the automated reporter.
pub const REPORTER_TAG: &str = "AI-QA-System";

/// A recorded test failure with severity/status metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectRecord {
    /// Unique identifier, assigned at creation, never reused or mutated
    pub id: String,

    /// Name of the failing check
    pub test_name: String,

    /// Failure description
    pub error: String,

    /// Prediction confidence in [0, 1]; null when not applicable
    pub confidence: Option<f64>,

    /// Creation instant; set once
    pub timestamp: DateTime<Utc>,

    /// Impact classification
    pub severity: Severity,

    /// Lifecycle position; starts at Open
    pub status: Status,

    /// Provenance tag of the reporter
    pub created_by: String,

    /// Instant of the most recent status change; absent until the first one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DefectRecord {
    /// Create a new open defect.
    ///
    /// The id is a random UUIDv4, so ids are collision-free even for
    /// records created within the same instant.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ConfidenceOutOfRange` if `confidence` is
    /// present and falls outside [0, 1].
    pub fn new(
        test_name: impl Into<String>,
        error: impl Into<String>,
        confidence: Option<f64>,
        severity: Severity,
    ) -> Result<Self, ValidationError> {
        if let Some(c) = confidence {
            if !(0.0..=1.0).contains(&c) {
                return Err(ValidationError::ConfidenceOutOfRange(c));
            }
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            test_name: test_name.into(),
            error: error.into(),
            confidence,
            timestamp: Utc::now(),
            severity,
            status: Status::Open,
            created_by: REPORTER_TAG.to_string(),
            updated_at: None,
        })
    }

    /// Move the record to a new lifecycle status.
    ///
    /// Sets `updated_at` on every call; no other field is touched.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.updated_at = Some(Utc::now());
    }

    /// Returns whether the defect is still open
    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_open_without_updated_at() {
        let record =
            DefectRecord::new("test_login", "AssertionError", Some(0.9), Severity::Major).unwrap();

        assert_eq!(record.status, Status::Open);
        assert!(record.is_open());
        assert!(record.updated_at.is_none());
        assert_eq!(record.created_by, REPORTER_TAG);
    }

    #[test]
    fn test_ids_are_distinct_within_the_same_instant() {
        let a = DefectRecord::new("t", "e", None, Severity::Critical).unwrap();
        let b = DefectRecord::new("t", "e", None, Severity::Critical).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_confidence_bounds_enforced() {
        assert!(DefectRecord::new("t", "e", Some(0.0), Severity::Minor).is_ok());
        assert!(DefectRecord::new("t", "e", Some(1.0), Severity::Minor).is_ok());

        let err = DefectRecord::new("t", "e", Some(1.5), Severity::Minor).unwrap_err();
        assert_eq!(err, ValidationError::ConfidenceOutOfRange(1.5));

        let err = DefectRecord::new("t", "e", Some(-0.1), Severity::Minor).unwrap_err();
        assert_eq!(err, ValidationError::ConfidenceOutOfRange(-0.1));
    }

    #[test]
    fn test_set_status_touches_only_status_and_updated_at() {
        let mut record = DefectRecord::new("t", "e", None, Severity::Major).unwrap();
        let before = record.clone();

        record.set_status(Status::Fixed);

        assert_eq!(record.status, Status::Fixed);
        assert!(record.updated_at.is_some());
        assert_eq!(record.id, before.id);
        assert_eq!(record.test_name, before.test_name);
        assert_eq!(record.error, before.error);
        assert_eq!(record.confidence, before.confidence);
        assert_eq!(record.timestamp, before.timestamp);
        assert_eq!(record.severity, before.severity);
        assert_eq!(record.created_by, before.created_by);
    }

    #[test]
    fn test_wire_format_omits_unset_updated_at() {
        let record = DefectRecord::new("t", "e", None, Severity::Major).unwrap();
        let json = serde_json::to_string(&record).unwrap();

        assert!(!json.contains("updated_at"));
        // confidence is null, not absent
        assert!(json.contains(r#""confidence":null"#));
    }

    #[test]
    fn test_wire_format_round_trip() {
        let mut record =
            DefectRecord::new("test_x", "boom", Some(0.4), Severity::Blocker).unwrap();
        record.set_status(Status::Reopened);

        let json = serde_json::to_string(&record).unwrap();
        let back: DefectRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
