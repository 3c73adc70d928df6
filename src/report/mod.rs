//! Report Aggregator
//!
//! Derives severity/status counts from the current record set.
//!
//! Every severity bucket and every status bucket exists in the output,
//! zeroed, before any record is counted: absent categories report as 0,
//! not as missing keys. Out-of-set values cannot reach this module; the
//! closed sum types reject them at the parse boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{DefectRecord, Severity, Status};

/// Derived counts of defects grouped by severity and by status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectReport {
    /// Total number of records counted
    pub total_defects: u64,

    /// Count per severity; all five buckets always present
    pub by_severity: BTreeMap<Severity, u64>,

    /// Count per status; all five buckets always present
    pub by_status: BTreeMap<Status, u64>,
}

impl DefectReport {
    /// An empty report with every bucket zeroed.
    pub fn empty() -> Self {
        Self {
            total_defects: 0,
            by_severity: Severity::ALL.iter().map(|s| (*s, 0)).collect(),
            by_status: Status::ALL.iter().map(|s| (*s, 0)).collect(),
        }
    }

    /// Compute the aggregate view of a record set in one pass.
    pub fn compute(records: &[DefectRecord]) -> Self {
        let mut report = Self::empty();

        for record in records {
            report.total_defects += 1;
            *report.by_severity.entry(record.severity).or_insert(0) += 1;
            *report.by_status.entry(record.status).or_insert(0) += 1;
        }

        report
    }

    /// Count for one severity bucket.
    pub fn severity_count(&self, severity: Severity) -> u64 {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }

    /// Count for one status bucket.
    pub fn status_count(&self, status: Status) -> u64 {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
