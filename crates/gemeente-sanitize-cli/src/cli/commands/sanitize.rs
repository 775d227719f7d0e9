use std::path::Path;

use anyhow::{Context, Result};
use gemeente_sanitize_core::{
    FileOutcome, RunMode, RunSummary, SanitizeConfig, SanitizeError, Sanitizer,
};

use crate::cli::args::Cli;
use crate::exit_codes;

pub fn run(args: Cli) -> Result<i32> {
    let mode = args.mode();
    let config = SanitizeConfig::default()
        .with_root(&args.root)
        .with_default_note(args.default_note.clone())
        .with_mode(mode);
    let sanitizer = Sanitizer::new(config);

    let root = sanitizer.config().root_directory.as_path();
    tracing::debug!(root = %root.display(), ?mode, "starting run");
    let summary = sanitizer
        .run_with(root, |path, result| report_file(path, result, mode))
        .with_context(|| format!("failed to sanitize {}", root.display()))?;

    if let Some(out) = &args.summary_json {
        write_summary(out, &summary)?;
    }
    if !args.quiet || summary.has_failures() {
        eprintln!("{summary}");
    }

    if mode == RunMode::Check && summary.updated > 0 {
        return Ok(exit_codes::CHECK_FAILED);
    }
    Ok(exit_codes::SUCCESS)
}

fn report_file(path: &Path, result: &Result<FileOutcome, SanitizeError>, mode: RunMode) {
    match (result, mode) {
        (Ok(_), RunMode::Write) => println!("Updated: {}", path.display()),
        (Ok(FileOutcome::Changed), RunMode::Check) => {
            println!("Would update: {}", path.display())
        }
        (Ok(FileOutcome::Unchanged), RunMode::Check) => {}
        (Err(e), _) => println!("Failed to process {}: {}", path.display(), e),
    }
}

fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(summary).context("failed to encode run summary")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
