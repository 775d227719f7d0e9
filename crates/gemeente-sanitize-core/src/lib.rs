//! Normalization of per-gemeente parking rule records.
//!
//! A [`Sanitizer`] walks a directory of JSON records and rewrites each one in
//! place: `boundaries.coordinates` is kept on a single compact line,
//! `parkingRules.motorcycleSpecific.notes` is filled in when missing or blank,
//! and the rest of the document is indented with four spaces.

pub mod config;
pub mod error;
pub mod record;
pub mod render;
pub mod sanitizer;
pub mod summary;
pub mod walk;

pub use config::{RunMode, SanitizeConfig, DEFAULT_NOTE, DEFAULT_ROOT_DIRECTORY};
pub use error::{Result, SanitizeError};
pub use sanitizer::Sanitizer;
pub use summary::{FileFailure, FileOutcome, RunSummary};
