//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a whole file, mapping failures to `internal.io_error`.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("read {}", path.display()))))
}

/// Replace a file's content by writing a sibling `.tmp` file and renaming it over.
///
/// Readers see either the old content or the new content, never a partial write.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let context = format!("write {}", path.display());

    let (Some(parent), Some(filename)) = (path.parent(), path.file_name()) else {
        return Err(Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(context),
        ));
    };

    let tmp_path = parent.join(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("{} (write temp)", context))))?;

    fs::rename(&tmp_path, path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("{} (rename)", context))))?;

    Ok(())
}
