// ============================================================================
// domain/error.rs - MANIFEST INVARIANT VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Cloneable so it can travel inside `TrestleError`; every variant carries
/// suggestions for the CLI report.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Empty paths are not allowed in a manifest")]
    EmptyPath,

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the base directory: {path}")]
    PathEscapesBase { path: String },

    // ========================================================================
    // Manifest Structure Errors
    // ========================================================================
    #[error("Manifest '{name}' declares no entries")]
    EmptyManifest { name: String },

    #[error("Duplicate path in manifest: {path}")]
    DuplicatePath { path: String },

    #[error("File '{path}' has no parent directory declared before it")]
    ParentNotDeclared { path: String },

    #[error("File '{path}' collides with a directory of the same name")]
    FileShadowsDirectory { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ParentNotDeclared { path } => vec![
                format!("Declare a directory containing '{}' in the same or an earlier group", path),
                "Directories are created before files within each group".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Remove the second declaration of '{}'", path),
            ],
            Self::AbsolutePathNotAllowed { .. } | Self::PathEscapesBase { .. } => vec![
                "Manifest paths must be relative and stay under the base directory".into(),
            ],
            _ => vec!["The built-in manifest is inconsistent; please report this".into()],
        }
    }
}
