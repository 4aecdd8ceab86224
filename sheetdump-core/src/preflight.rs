//! Checks run once before a workbook is loaded

use crate::error::{DumpError, Result};
use std::path::Path;

/// Extensions the reader is expected to handle
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm"];

/// Fail fast if the workbook is missing or not a supported format
pub fn check(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(DumpError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(DumpError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        });
    }

    Ok(())
}
