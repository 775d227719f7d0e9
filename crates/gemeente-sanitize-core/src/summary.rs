use std::path::PathBuf;

use serde::Serialize;

use crate::error::SanitizeError;

/// Result of processing one file that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The normalized text differs from what was on disk.
    Changed,
    /// The file was already in normalized form.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Aggregate of one run over a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub scanned: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub failed: Vec<FileFailure>,
}

impl RunSummary {
    pub fn record(&mut self, path: PathBuf, result: &Result<FileOutcome, SanitizeError>) {
        self.scanned += 1;
        match result {
            Ok(FileOutcome::Changed) => self.updated += 1,
            Ok(FileOutcome::Unchanged) => self.unchanged += 1,
            Err(err) => self.failed.push(FileFailure {
                path,
                error: err.to_string(),
            }),
        }
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} file(s) scanned: {} updated, {} unchanged, {} failed",
            self.scanned,
            self.updated,
            self.unchanged,
            self.failed_count()
        )
    }
}
