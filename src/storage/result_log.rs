//! Append-only CSV result log.
//!
//! One record per completed scan, no header row. Field order:
//! `timestamp, domain, dmarc policy, spf record, spf strictness`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::config::LOG_TIMESTAMP_FORMAT;
use crate::error_handling::LogWriteError;
use crate::models::DomainScanResult;
use crate::policy::SpfStrictness;

/// Handle to the result log file.
///
/// The file is opened in append mode for every record and closed again, so a run
/// never holds it open between domains. Callers must serialize `append` calls; the
/// scan loop is the only writer.
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    /// Creates a handle; the file itself is created on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one scan result and syncs it to disk.
    ///
    /// The record is encoded in memory first and written with a single `write_all`
    /// on an `O_APPEND` handle, so a failed encode never leaves a partial line.
    ///
    /// # Errors
    ///
    /// Returns a `LogWriteError` if the file cannot be opened, written or synced.
    /// Failures are not fatal to the scan.
    pub fn append(&self, result: &DomainScanResult) -> Result<(), LogWriteError> {
        let line = encode_record(&format_log_record(result))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| LogWriteError::Open {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(&line).map_err(|source| LogWriteError::Write {
            path: self.path.clone(),
            source,
        })?;

        file.sync_data().map_err(|source| LogWriteError::Sync {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }

    /// Runs [`append`](Self::append) on tokio's blocking pool.
    ///
    /// The open, write and `sync_data` calls are blocking file I/O; moving them off
    /// the runtime keeps concurrent lookups progressing while a record is synced.
    ///
    /// # Errors
    ///
    /// Same as `append`, plus `LogWriteError::Task` if the blocking task panics.
    pub async fn append_async(&self, result: &DomainScanResult) -> Result<(), LogWriteError> {
        let log = self.clone();
        let result = result.clone();
        tokio::task::spawn_blocking(move || log.append(&result)).await?
    }
}

/// Builds the log fields for a result.
///
/// Missing values are written as empty fields. An absent SPF record leaves the
/// strictness field empty as well, keeping existing `log.csv` consumers working.
pub fn format_log_record(result: &DomainScanResult) -> [String; 5] {
    let strictness = match result.spf.strictness {
        SpfStrictness::Absent => String::new(),
        other => other.to_string(),
    };
    [
        result.timestamp.format(LOG_TIMESTAMP_FORMAT).to_string(),
        result.domain.clone(),
        result.dmarc.policy.clone().unwrap_or_default(),
        result.spf.raw_record.clone().unwrap_or_default(),
        strictness,
    ]
}

fn encode_record(fields: &[String; 5]) -> Result<Vec<u8>, LogWriteError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(fields)?;
    writer
        .into_inner()
        .map_err(|e| LogWriteError::Encode(e.into_error().into()))
}
