use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use inspect_rewrite::defaults;
use inspect_rewrite::runner::{self, FileOutcome, RunOptions};

use crate::commands::CmdResult;

#[derive(Args, Debug, Default)]
pub struct RewriteArgs {
    /// Directory holding the test files (default: current directory)
    #[arg(long)]
    pub path: Option<String>,
    /// Test file name suffix (default: _test.mbt, or inspect-rewrite.json)
    #[arg(long)]
    pub suffix: Option<String>,
    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RewriteOutput {
    #[serde(rename = "rewrite")]
    Rewrite {
        root: String,
        suffix: String,
        dry_run: bool,
        total_files: usize,
        updated: usize,
        files: Vec<FileOutcome>,
    },
}

pub fn run(args: RewriteArgs) -> CmdResult<RewriteOutput> {
    let root = resolve_root(args.path.as_deref());
    let config = defaults::load_config(&root)?;

    let options = RunOptions {
        suffix: args.suffix.unwrap_or(config.defaults.test_suffix),
        dry_run: args.dry_run || config.defaults.dry_run,
    };

    let summary = runner::run(&root, &options)?;

    Ok((
        RewriteOutput::Rewrite {
            root: summary.root,
            suffix: summary.suffix,
            dry_run: summary.dry_run,
            total_files: summary.total_files,
            updated: summary.updated,
            files: summary.files,
        },
        0,
    ))
}

fn resolve_root(path: Option<&str>) -> PathBuf {
    match path {
        Some(p) => PathBuf::from(shellexpand::tilde(p).to_string()),
        None => PathBuf::from("."),
    }
}
