//! # Storage Errors
//!
//! Error codes:
//! - DEFECT_STORE_READ_FAILED
//! - DEFECT_STORE_PARSE_FAILED
//! - DEFECT_STORE_WRITE_FAILED
//!
//! Every variant carries the path of the backing file so a failing
//! harness run can be traced to the store it was pointed at.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures of the backing record store
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file exists but could not be read
    #[error("Failed to read record store at {path}")]
    ReadFailed {
        /// Path of the backing file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The backing data exists but is not a valid record set
    #[error("Record store at {path} is corrupt or unparseable")]
    ParseFailed {
        /// Path of the backing file
        path: PathBuf,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// The record set could not be written; the prior state is intact
    #[error("Failed to write record store at {path}: {detail}")]
    WriteFailed {
        /// Path of the backing file
        path: PathBuf,
        /// What stage of the write failed
        detail: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::ReadFailed { .. } => "DEFECT_STORE_READ_FAILED",
            StorageError::ParseFailed { .. } => "DEFECT_STORE_PARSE_FAILED",
            StorageError::WriteFailed { .. } => "DEFECT_STORE_WRITE_FAILED",
        }
    }

    /// Returns the path of the backing store the failure refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            StorageError::ReadFailed { path, .. }
            | StorageError::ParseFailed { path, .. }
            | StorageError::WriteFailed { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = StorageError::ReadFailed {
            path: PathBuf::from("defects_log.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.code(), "DEFECT_STORE_READ_FAILED");

        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = StorageError::ParseFailed {
            path: PathBuf::from("defects_log.json"),
            source: parse_err,
        };
        assert_eq!(err.code(), "DEFECT_STORE_PARSE_FAILED");
    }

    #[test]
    fn test_display_names_the_path() {
        let err = StorageError::WriteFailed {
            path: PathBuf::from("/tmp/qa/defects_log.json"),
            detail: "rename failed".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        let display = err.to_string();
        assert!(display.contains("/tmp/qa/defects_log.json"));
        assert!(display.contains("rename failed"));
    }
}
