//! Defect lifecycle status
//!
//! Fixed five-state lifecycle. Every record starts at `Open` and may move
//! to any other member; no transition graph is modeled beyond set
//! membership.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// Lifecycle position of a defect
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Reported, not yet picked up
    Open,
    /// Being worked on
    #[serde(rename = "In Progress")]
    InProgress,
    /// Fix landed, awaiting verification
    Fixed,
    /// Failure recurred after a fix
    Reopened,
    /// Verified resolved
    Closed,
}

impl Status {
    /// All statuses, in declaration order
    pub const ALL: [Status; 5] = [
        Status::Open,
        Status::InProgress,
        Status::Fixed,
        Status::Reopened,
        Status::Closed,
    ];

    /// Returns the wire-format name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Fixed => "Fixed",
            Status::Reopened => "Reopened",
            Status::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Status::Open),
            "In Progress" => Ok(Status::InProgress),
            "Fixed" => Ok(Status::Fixed),
            "Reopened" => Ok(Status::Reopened),
            "Closed" => Ok(Status::Closed),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}
