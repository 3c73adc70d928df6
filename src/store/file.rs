//! JSON file store with atomic-swap writes
//!
//! Layout: one JSON array of record objects, pretty-printed, at a
//! configurable path (default `defects_log.json` in the working
//! directory).
//!
//! Durability discipline for `save`:
//! - serialize the full set to a sibling temporary file
//! - fsync the temporary
//! - atomically rename it over the live file
//! - fsync the parent directory so the rename itself is durable
//!
//! A reader therefore sees either the old set or the new set, never a
//! partially written file, and a failed save leaves the old set intact.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::model::DefectRecord;

use super::errors::{StorageError, StorageResult};
use super::RecordStore;

/// Default backing file name, in the working directory.
pub const DEFAULT_STORE_FILE: &str = "defects_log.json";

/// File-backed record store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path to the backing JSON file
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given path.
    ///
    /// The file is created lazily on the first `save`; a missing file
    /// loads as the empty set.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default location, `defects_log.json` in the
    /// working directory.
    pub fn default_location() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path the new set is staged at before the swap.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "defects_log.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_failed(&self, detail: &str, source: std::io::Error) -> StorageError {
        StorageError::WriteFailed {
            path: self.path.clone(),
            detail: detail.to_string(),
            source,
        }
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> StorageResult<Vec<DefectRecord>> {
        let contents = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            // First use: no backing file yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        serde_json::from_slice(&contents).map_err(|e| StorageError::ParseFailed {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&self, records: &[DefectRecord]) -> StorageResult<()> {
        // Serialization cannot fail for a valid record set, but a failure
        // here must still leave the live file untouched.
        let body = serde_json::to_vec_pretty(records).map_err(|e| {
            self.write_failed(
                "serialization failed",
                std::io::Error::new(ErrorKind::InvalidData, e),
            )
        })?;

        let staging = self.staging_path();

        let mut tmp = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&staging)
            .map_err(|e| self.write_failed("failed to open staging file", e))?;

        tmp.write_all(&body)
            .map_err(|e| self.write_failed("failed to write staging file", e))?;

        // fsync - mandatory before the swap, or the rename could land a
        // file whose contents are not yet on disk
        tmp.sync_all()
            .map_err(|e| self.write_failed("fsync of staging file failed", e))?;
        drop(tmp);

        fs::rename(&staging, &self.path).map_err(|e| {
            // Best effort: don't leave the staging file behind
            let _ = fs::remove_file(&staging);
            self.write_failed("atomic rename failed", e)
        })?;

        // Make the rename itself durable
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
