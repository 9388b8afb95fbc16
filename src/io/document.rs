//! Whole-file reads and in-place rewrites of HTML documents

use crate::io::error::{Result, file_access};
use std::path::Path;

/// Read a document as a single string
///
/// # Errors
///
/// Returns `FileAccess` if the file is missing, unreadable or not UTF-8
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(file_access(path, "read document"))
}

/// Overwrite a document with new contents
///
/// # Errors
///
/// Returns `FileAccess` if the file cannot be created or written
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(file_access(path, "write document"))
}
