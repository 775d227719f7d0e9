//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use gemeente_sanitize_core::record::is_blank;
use gemeente_sanitize_core::{RunMode, DEFAULT_NOTE, DEFAULT_ROOT_DIRECTORY};


#[derive(Parser, Debug, Clone)]
#[command(
    name = "gemeente-sanitize",
    version,
    about = "Normalize gemeente parking rule records: compact boundary coordinates, fill in missing motorcycle notes"
)]
pub struct Cli {
    /// Directory scanned recursively for *.json records
    #[arg(long, env = "GEMEENTE_SANITIZE_ROOT", default_value = DEFAULT_ROOT_DIRECTORY)]
    pub root: PathBuf,

    /// Note written when parkingRules.motorcycleSpecific.notes is missing, null or blank
    #[arg(
        long,
        env = "GEMEENTE_SANITIZE_DEFAULT_NOTE",
        default_value = DEFAULT_NOTE,
        value_parser = parse_note
    )]
    pub default_note: String,

    /// Preview only (no write); exit 1 when any record is not normalized
    #[arg(long)]
    pub check: bool,

    /// Write the run summary as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Do not print the summary line to stderr unless some files failed
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn mode(&self) -> RunMode {
        if self.check {
            RunMode::Check
        } else {
            RunMode::Write
        }
    }
}

fn parse_note(raw: &str) -> Result<String, String> {
    if is_blank(raw) {
        return Err("default note must not be blank".to_string());
    }
    Ok(raw.to_string())
}
