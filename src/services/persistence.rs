//! Persistence service: file-backed storage for the daily gate.
//!
//! DESIGN
//! ======
//! One small JSON document per user, `{"lastSpinDate": "<RFC 3339>"}`, playing
//! the role `localStorage` plays for the browser page. A missing file means
//! nothing was ever stored.
//!
//! Saves go to a sibling `.tmp` file that is then renamed over the record,
//! so a crash mid-write leaves the previous record intact.
//!
//! ERROR HANDLING
//! ==============
//! Read and write failures surface as [`StoreError`]; the gate decides policy
//! (fail open on read).

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;
use wheel::gate::{RecordStore, SpinRecord, StoreError};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Option<SpinRecord>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record = serde_json::from_str::<SpinRecord>(&raw)?;
        Ok(Some(record))
    }

    fn save(&mut self, record: &SpinRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(record)?;
        let staging = self.staging_path();
        fs::write(&staging, raw)?;
        if let Err(e) = fs::rename(&staging, &self.path) {
            if let Err(cleanup) = fs::remove_file(&staging) {
                debug!(path = %staging.display(), error = %cleanup, "staging file left behind");
            }
            return Err(e.into());
        }
        debug!(path = %self.path.display(), "spin record saved");
        Ok(())
    }
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;
