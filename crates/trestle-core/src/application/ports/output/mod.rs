//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `trestle-adapters` crate provides the filesystems; the CLI provides
//! the console reporter.

use std::path::Path;

use crate::error::TrestleResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `trestle_adapters::filesystem::LocalFilesystem` (production)
/// - `trestle_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Create a directory and all missing parents. Succeeds if it already
    /// exists.
    fn create_dir_all(&self, path: &Path) -> TrestleResult<()>;

    /// Create or truncate `path` and write `content` into it.
    fn write_file(&self, path: &Path, content: &str) -> TrestleResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port notified after each filesystem step succeeds.
///
/// Paths are relative to the scaffold base directory.
pub trait ProgressReporter {
    fn directory_created(&self, path: &Path);

    fn file_created(&self, path: &Path);
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn directory_created(&self, _path: &Path) {}

    fn file_created(&self, _path: &Path) {}
}
