//! Conversion run state tracking.

use std::path::PathBuf;

/// A single successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    /// Original file name inside the target directory.
    pub source_name: String,
    /// Destination path relative to the target directory.
    pub dest_path: PathBuf,
}

/// A single failed conversion.
#[derive(Debug)]
pub struct FailedFile {
    /// Original file name inside the target directory.
    pub source_name: String,
    /// Why the file could not be converted.
    pub reason: crate::error::Error,
}

/// Accumulated state for one conversion run.
///
/// Returned from the conversion function rather than held globally, so a
/// run is a pure function from directory snapshot to report.
#[derive(Debug, Default)]
pub struct ConvertState {
    /// Files successfully moved, in processing order.
    pub converted: Vec<ConvertedFile>,
    /// Files that failed, in processing order.
    pub failed: Vec<FailedFile>,
    /// Candidate files examined (namespace and plain alike).
    pub scanned_count: u64,
}

impl ConvertState {
    /// Record a successful move.
    pub fn record_converted(&mut self, source_name: String, dest_path: PathBuf) {
        self.converted.push(ConvertedFile {
            source_name,
            dest_path,
        });
    }

    /// Record a per-file failure.
    pub fn record_failed(&mut self, source_name: String, reason: crate::error::Error) {
        self.failed.push(FailedFile {
            source_name,
            reason,
        });
    }

    /// Number of files successfully converted.
    pub fn converted_count(&self) -> u64 {
        self.converted.len() as u64
    }

    /// Number of files that failed to convert.
    pub fn failed_count(&self) -> u64 {
        self.failed.len() as u64
    }
}
