//! Defect severity classification
//!
//! Fixed five-level impact scale. The set is closed: external callers
//! supplying strings go through [`Severity::from_str`], which rejects
//! anything outside the set before a record can exist.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// Impact classification of a defect
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Blocks all further testing
    Blocker,
    /// Core functionality broken
    Critical,
    /// Significant feature degraded
    Major,
    /// Cosmetic or low-impact issue
    Minor,
    /// Negligible impact
    Trivial,
}

impl Severity {
    /// All severities, in declaration order
    pub const ALL: [Severity; 5] = [
        Severity::Blocker,
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
        Severity::Trivial,
    ];

    /// Returns the wire-format name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Blocker => "Blocker",
            Severity::Critical => "Critical",
            Severity::Major => "Major",
            Severity::Minor => "Minor",
            Severity::Trivial => "Trivial",
        }
    }
}

impl Default for Severity {
    /// Unclassified failures default to Critical, matching the reporter's
    /// convention of treating unknown breakage as serious until triaged.
    fn default() -> Self {
        Severity::Critical
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Blocker" => Ok(Severity::Blocker),
            "Critical" => Ok(Severity::Critical),
            "Major" => Ok(Severity::Major),
            "Minor" => Ok(Severity::Minor),
            "Trivial" => Ok(Severity::Trivial),
            other => Err(ValidationError::UnknownSeverity(other.to_string())),
        }
    }
}
