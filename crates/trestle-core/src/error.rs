//! Unified error handling for Trestle Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Trestle Core operations.
#[derive(Debug, Error, Clone)]
pub enum TrestleError {
    /// Errors from the domain layer (manifest invariant violations).
    #[error("Invalid manifest: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem steps).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl TrestleError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Manifest,
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The manifest itself is inconsistent.
    Manifest,
    /// A filesystem step failed.
    Filesystem,
}

/// Convenient result type alias.
pub type TrestleResult<T> = Result<T, TrestleError>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::application::FsOperation;

    #[test]
    fn filesystem_error_is_transparent() {
        let err: TrestleError = ApplicationError::filesystem(
            "lib",
            FsOperation::CreateDirectory,
            &io::Error::new(io::ErrorKind::Other, "disk full"),
        )
        .into();
        assert_eq!(err.to_string(), "Failed to create directory lib: disk full");
        assert_eq!(err.category(), ErrorCategory::Filesystem);
    }

    #[test]
    fn domain_error_is_manifest_category() {
        let err: TrestleError = DomainError::DuplicatePath { path: "lib".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Manifest);
        assert!(err.to_string().starts_with("Invalid manifest"));
        assert!(!err.suggestions().is_empty());
    }
}
