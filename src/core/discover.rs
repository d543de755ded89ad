//! Test file discovery.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Files directly inside `root` whose names end with `suffix`, sorted by path.
pub fn discover_test_files(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "path",
            format!("Directory not found: {}", root.display()),
            Some(root.display().to_string()),
        )
        .with_hint("Pass --path with the directory that holds the test files"));
    }

    let pattern = format!(
        "{}/*{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        glob::Pattern::escape(suffix)
    );

    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .map_err(|e| {
            Error::validation_invalid_argument(
                "suffix",
                format!("Invalid file pattern '{}': {}", pattern, e),
                Some(suffix.to_string()),
            )
        })?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    files.sort();
    Ok(files)
}
