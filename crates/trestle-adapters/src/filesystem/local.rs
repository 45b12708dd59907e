//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;
use trestle_core::{
    application::{ApplicationError, FsOperation, ports::Filesystem},
    error::{TrestleError, TrestleResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> TrestleResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path)
            .map_err(|e| map_io_error(path, e, FsOperation::CreateDirectory))
    }

    fn write_file(&self, path: &Path, content: &str) -> TrestleResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        // `fs::write` opens with create + truncate.
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, FsOperation::WriteFile))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: FsOperation) -> TrestleError {
    ApplicationError::filesystem(path, operation, &e).into()
}
