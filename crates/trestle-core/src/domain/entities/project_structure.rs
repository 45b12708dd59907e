use std::path::{Path, PathBuf};

use crate::domain::entities::common::RelativePath;

/// Final project structure ready for materialization.
///
/// This is the manifest flattened into the exact order the filesystem steps
/// run in. It contains no business logic, only data.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) base: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: RelativePath, content: String) {
        self.entries
            .push(FsEntry::File(FileToWrite { path, content }));
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.entries
            .push(FsEntry::Directory(DirectoryToCreate { path }));
    }

    /// Directory every relative entry is resolved against.
    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
}
