//! Tree-walk options and top-level error types.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

////////////////////////////////////////////////////////////////////////////////
// #region Options

/// Per-call options for [`crate::copy_dir`] and [`crate::empty_dir`].
///
/// Options apply only to the call they are passed to; recursive
/// self-invocations always run with defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecTreeOptions {
    /// Emit one line per file copied/deleted and a summary line when an
    /// emptying run completes.
    pub if_with_log: bool,
    /// Surface validation failures as errors instead of returning silently.
    pub if_throw_when_error: bool,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Tree-walk failures.
///
/// The four validation variants are returned only when
/// [`SpecTreeOptions::if_throw_when_error`] is set; with the flag unset the
/// operation returns `Ok(())` without touching the filesystem.
/// [`TreeWalkError::BackendFailed`] wraps any failure raised by the
/// filesystem collaborator and is returned regardless of options.
#[derive(Debug)]
pub enum TreeWalkError {
    /// Copy source path does not exist.
    SourceNotFound(PathBuf),
    /// Copy source path exists but is not a directory.
    SourceNotDirectory(PathBuf),
    /// Copy destination path exists but is not a directory.
    DestinationNotDirectory(PathBuf),
    /// Emptying target path exists but is not a directory.
    TargetNotDirectory(PathBuf),
    /// A filesystem collaborator operation failed.
    BackendFailed {
        /// Path the failing operation was applied to.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
}

impl TreeWalkError {
    pub(crate) fn backend_failed(path: &Path, error_io: io::Error) -> Self {
        Self::BackendFailed {
            path: path.to_path_buf(),
            message: error_io.to_string(),
        }
    }
}

impl fmt::Display for TreeWalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotFound(path) => {
                write!(f, "Source directory does not exist: {}", path.display())
            }
            Self::SourceNotDirectory(path) => {
                write!(f, "Source is not a directory: {}", path.display())
            }
            Self::DestinationNotDirectory(path) => {
                write!(f, "Destination is not a directory: {}", path.display())
            }
            Self::TargetNotDirectory(path) => {
                write!(f, "Target is not a directory: {}", path.display())
            }
            Self::BackendFailed { path, message } => {
                write!(
                    f,
                    "Filesystem operation failed at {}: {message}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TreeWalkError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::TreeWalkError;

    #[test]
    fn tree_walk_error_display_names_path() {
        let err = TreeWalkError::SourceNotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "Source directory does not exist: /missing");

        let err = TreeWalkError::BackendFailed {
            path: PathBuf::from("/blocked"),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Filesystem operation failed at /blocked: permission denied"
        );
    }
}
