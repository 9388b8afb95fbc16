//! Error type for reading and writing the image list and documents

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all substitution runs
#[derive(Debug)]
pub enum SubstitutionError {
    /// A file could not be read, written or listed
    FileAccess {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl SubstitutionError {
    /// Path of the file the failing operation touched
    pub fn path(&self) -> &Path {
        match self {
            Self::FileAccess { path, .. } => path,
        }
    }
}

impl fmt::Display for SubstitutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileAccess {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "Failed to {operation} '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SubstitutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileAccess { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for substitution results
pub type Result<T> = std::result::Result<T, SubstitutionError>;

/// Build a `map_err` adapter that attaches a path and operation to an I/O error
pub fn file_access(
    path: &Path,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> SubstitutionError {
    let path = path.to_path_buf();
    move |source| SubstitutionError::FileAccess {
        path,
        operation,
        source,
    }
}
