use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SanitizeError};

pub const JSON_SUFFIX: &str = ".json";

/// True when the file name ends with `.json` (case-sensitive).
pub fn is_json_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(JSON_SUFFIX.as_bytes()))
}

/// Collect every `.json` file below `root`, sorted by file name within each directory.
///
/// Entries that cannot be read below the root are logged and skipped; a
/// missing or unreadable root is an error.
pub fn find_json_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(SanitizeError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(SanitizeError::Walk {
                    path: root.to_path_buf(),
                    source: err,
                })
            }
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.into_path();
        if is_json_file(&path) && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
