use std::fs;
use std::path::Path;

use crate::config::{RunMode, SanitizeConfig};
use crate::error::{Result, SanitizeError};
use crate::record::normalize;
use crate::render::render;
use crate::summary::{FileOutcome, RunSummary};
use crate::walk::find_json_files;

/// Rewrites gemeente records in place.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    config: SanitizeConfig,
}

impl Sanitizer {
    pub fn new(config: SanitizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SanitizeConfig {
        &self.config
    }

    /// Normalize one document given as text and return the text to persist.
    pub fn sanitize_str(&self, input: &str) -> Result<String> {
        let doc = serde_json::from_str(input).map_err(|source| SanitizeError::Parse { source })?;
        let record = normalize(doc, &self.config.default_note)?;
        tracing::debug!(
            coordinates = record.report.coordinates_extracted,
            rules_reset = record.report.parking_rules_reset,
            motorcycle_reset = record.report.motorcycle_reset,
            note_defaulted = record.report.note_defaulted,
            "normalized record"
        );
        render(&record)
    }

    /// Normalize the file at `path`.
    ///
    /// In [`RunMode::Write`] the file is overwritten with the normalized text;
    /// in [`RunMode::Check`] it is only read. Any error before the write step
    /// leaves the file untouched.
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        let _span = tracing::debug_span!("process_file", path = %path.display()).entered();

        let original = fs::read_to_string(path).map_err(|source| SanitizeError::Read { source })?;
        let normalized = self.sanitize_str(&original)?;
        let outcome = if normalized == original {
            FileOutcome::Unchanged
        } else {
            FileOutcome::Changed
        };

        if self.config.mode == RunMode::Write {
            fs::write(path, normalized.as_bytes()).map_err(|source| SanitizeError::Write { source })?;
        }
        Ok(outcome)
    }

    /// Process every `.json` file under `root`, one at a time.
    pub fn run(&self, root: &Path) -> Result<RunSummary> {
        self.run_with(root, |_, _| {})
    }

    /// Like [`Sanitizer::run`], calling `on_file` with each file's result as it completes.
    ///
    /// Per-file failures are collected in the summary and never stop the run;
    /// only a missing or unreadable `root` returns `Err`.
    pub fn run_with<F>(&self, root: &Path, mut on_file: F) -> Result<RunSummary>
    where
        F: FnMut(&Path, &Result<FileOutcome>),
    {
        let files = find_json_files(root)?;
        tracing::debug!(root = %root.display(), count = files.len(), "scanning");

        let mut summary = RunSummary::default();
        for path in files {
            let result = self.process_file(&path);
            on_file(&path, &result);
            summary.record(path, &result);
        }
        Ok(summary)
    }
}
