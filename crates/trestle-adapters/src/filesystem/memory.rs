//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use trestle_core::{
    application::{ApplicationError, FsOperation, ports::Filesystem},
    error::TrestleResult,
};

/// In-memory filesystem for testing.
///
/// Mirrors the parts of `std::fs` semantics the scaffolder relies on:
/// writes need an existing parent, directories cannot replace files and
/// vice versa. [`MemoryFilesystem::deny`] makes a subtree fail with
/// `PermissionDenied`.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    denied: Vec<PathBuf>,
}

impl MemoryFilesystemInner {
    fn is_denied(&self, path: &Path) -> bool {
        self.denied.iter().any(|d| path.starts_with(d))
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Make every path under `prefix` fail with `PermissionDenied`.
    pub fn deny(&self, prefix: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.push(prefix.into());
        }
    }

    /// Seed a file, creating its ancestors (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            for ancestor in path.ancestors().skip(1) {
                if !ancestor.as_os_str().is_empty() {
                    inner.directories.insert(ancestor.to_path_buf());
                }
            }
            inner.files.insert(path, content.to_string());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// `true` if `path` is a known directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// All directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn failure(path: &Path, operation: FsOperation, kind: io::ErrorKind) -> ApplicationError {
    ApplicationError::filesystem(path, operation, &io::Error::from(kind))
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> TrestleResult<()> {
        let op = FsOperation::CreateDirectory;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| failure(path, op, io::ErrorKind::Other))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.directories.contains(&current) {
                continue;
            }
            if inner.files.contains_key(&current) {
                return Err(failure(path, op, io::ErrorKind::NotADirectory).into());
            }
            if inner.is_denied(&current) {
                return Err(failure(path, op, io::ErrorKind::PermissionDenied).into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> TrestleResult<()> {
        let op = FsOperation::WriteFile;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| failure(path, op, io::ErrorKind::Other))?;

        if inner.is_denied(path) {
            return Err(failure(path, op, io::ErrorKind::PermissionDenied).into());
        }

        if inner.directories.contains(path) {
            return Err(failure(path, op, io::ErrorKind::IsADirectory).into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(failure(path, op, io::ErrorKind::NotFound).into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}
