//! Apply the rewriter to every test file under a root directory.

use serde::Serialize;
use std::path::Path;

use crate::discover::discover_test_files;
use crate::error::Result;
use crate::io;
use crate::rewrite::{rewrite_content, ShapeCounts};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub suffix: String,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Updated,
    Unchanged,
    WouldUpdate,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// File name relative to the root.
    pub file: String,
    pub status: FileStatus,
    pub shapes: ShapeCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub root: String,
    pub suffix: String,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
    pub total_files: usize,
    pub updated: usize,
}

/// Rewrite every discovered test file, writing back only files that changed.
///
/// The first read or write failure aborts the run. Per-file status lines only
/// reach a terminal; the returned `files` list is the report that always exists.
pub fn run(root: &Path, options: &RunOptions) -> Result<RunSummary> {
    let files = discover_test_files(root, &options.suffix)?;
    let mut outcomes = Vec::with_capacity(files.len());

    for path in &files {
        outcomes.push(process_file(root, path, options.dry_run)?);
    }

    let updated = outcomes
        .iter()
        .filter(|o| o.status != FileStatus::Unchanged)
        .count();

    Ok(RunSummary {
        root: root.display().to_string(),
        suffix: options.suffix.clone(),
        dry_run: options.dry_run,
        total_files: outcomes.len(),
        updated,
        files: outcomes,
    })
}

fn process_file(root: &Path, path: &Path, dry_run: bool) -> Result<FileOutcome> {
    let name = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();

    log_status!("rewrite", "Processing {}...", name);

    let content = io::read_file(path)?;
    let result = rewrite_content(&content);

    let status = match (result.changed, dry_run) {
        (false, _) => {
            log_status!("rewrite", "  No changes to {}", name);
            FileStatus::Unchanged
        }
        (true, true) => {
            log_status!("rewrite", "  Would update {}", name);
            FileStatus::WouldUpdate
        }
        (true, false) => {
            io::write_file_atomic(path, &result.output)?;
            log_status!("rewrite", "  Updated {}", name);
            FileStatus::Updated
        }
    };

    Ok(FileOutcome {
        file: name,
        status,
        shapes: result.shapes,
    })
}
