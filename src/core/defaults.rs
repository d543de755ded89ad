use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::io;

/// Project-local config file, looked up in the root directory.
pub const CONFIG_FILE: &str = "inspect-rewrite.json";

/// Root configuration structure for inspect-rewrite.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RewriteConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Defaults that can be overridden via inspect-rewrite.json, then by CLI flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// File name suffix that marks a test file.
    #[serde(default = "default_test_suffix")]
    pub test_suffix: String,

    /// Report what would change without writing.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            test_suffix: default_test_suffix(),
            dry_run: false,
        }
    }
}

fn default_test_suffix() -> String {
    "_test.mbt".to_string()
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Load `<root>/inspect-rewrite.json`. A missing file yields defaults; a file
/// that exists but does not parse is an error.
pub fn load_config(root: &Path) -> Result<RewriteConfig> {
    let path = config_path(root);

    if !path.is_file() {
        return Ok(RewriteConfig::default());
    }

    let content = io::read_file(&path)?;

    serde_json::from_str(&content).map_err(|e| {
        Error::validation_invalid_json(e, Some(format!("parse {}", path.display())))
            .with_hint(format!("Fix or remove {}", CONFIG_FILE))
    })
}
