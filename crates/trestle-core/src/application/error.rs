//! Application layer errors.
//!
//! These errors represent failures while materializing a structure, not
//! manifest problems. Manifest problems are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// The filesystem step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    CreateDirectory,
    WriteFile,
}

impl std::fmt::Display for FsOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDirectory => write!(f, "create directory"),
            Self::WriteFile => write!(f, "write file"),
        }
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    ///
    /// `reason` is the operating system's message, kept verbatim.
    #[error("Failed to {operation} {path}: {reason}")]
    Filesystem {
        path: PathBuf,
        operation: FsOperation,
        kind: io::ErrorKind,
        reason: String,
    },
}

impl ApplicationError {
    /// Build a filesystem error from the `io::Error` returned by a step.
    pub fn filesystem(path: impl Into<PathBuf>, operation: FsOperation, err: &io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            operation,
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, kind, .. } => {
                let mut out = vec![format!("Failed to access: {}", path.display())];
                match kind {
                    io::ErrorKind::PermissionDenied => {
                        out.push("Check that you have write permissions".into())
                    }
                    io::ErrorKind::NotFound => {
                        out.push("Ensure the base directory exists".into())
                    }
                    io::ErrorKind::AlreadyExists => out.push(
                        "A file is in the way of a directory (or the reverse); move it aside"
                            .into(),
                    ),
                    _ => out.push("Check available disk space and the path name".into()),
                }
                out.push("Re-running is safe: existing directories are kept and files rewritten".into());
                out
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
        }
    }

    /// The `io::ErrorKind` behind a filesystem failure.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Filesystem { kind, .. } => *kind,
        }
    }
}
