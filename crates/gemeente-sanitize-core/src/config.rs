use std::path::PathBuf;

/// Directory scanned when no root is configured.
pub const DEFAULT_ROOT_DIRECTORY: &str = "./gemeentes";

/// Sentence written into `parkingRules.motorcycleSpecific.notes` when a record has none.
pub const DEFAULT_NOTE: &str =
    "Er zijn geen gegevens over parkeerregels beschikbaar voor deze gemeente.";

/// Whether a run writes normalized documents back or only reports on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Overwrite every processed file with its normalized form.
    #[default]
    Write,
    /// Leave files untouched; report which ones are not yet normalized.
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeConfig {
    pub root_directory: PathBuf,
    pub default_note: String,
    pub mode: RunMode,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            root_directory: PathBuf::from(DEFAULT_ROOT_DIRECTORY),
            default_note: DEFAULT_NOTE.to_string(),
            mode: RunMode::Write,
        }
    }
}

impl SanitizeConfig {
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_directory = root.into();
        self
    }

    pub fn with_default_note(mut self, note: impl Into<String>) -> Self {
        self.default_note = note.into();
        self
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }
}
