//! The scaffold manifest: ordered groups of directories and placeholder files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{common::RelativePath, project_structure::ProjectStructure},
    error::DomainError,
};

/// A file to write: a relative path plus its literal content (often empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    path: RelativePath,
    content: String,
}

impl FileSpec {
    pub fn new(path: RelativePath, content: impl Into<String>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// `true` when the file carries a one-line stub rather than nothing.
    pub fn has_stub(&self) -> bool {
        !self.content.is_empty()
    }
}

/// One logical group of the manifest (`core`, `data`, ...).
///
/// Within a group every directory is created before any file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestGroup {
    name: String,
    directories: Vec<RelativePath>,
    files: Vec<FileSpec>,
}

impl ManifestGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn with_directory(mut self, path: &str) -> Result<Self, DomainError> {
        self.directories.push(RelativePath::try_new(path)?);
        Ok(self)
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Result<Self, DomainError> {
        self.files
            .push(FileSpec::new(RelativePath::try_new(path)?, content));
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    pub fn files(&self) -> &[FileSpec] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

/// The full static manifest walked by the scaffolder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    name: String,
    groups: Vec<ManifestGroup>,
}

impl Manifest {
    pub fn builder(name: impl Into<String>) -> ManifestBuilder {
        ManifestBuilder {
            name: name.into(),
            groups: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn groups(&self) -> &[ManifestGroup] {
        &self.groups
    }

    /// All directories, in creation order.
    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.groups.iter().flat_map(|g| g.directories.iter())
    }

    /// All files, in write order.
    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.groups.iter().flat_map(|g| g.files.iter())
    }

    pub fn directory_count(&self) -> usize {
        self.groups.iter().map(|g| g.directories.len()).sum()
    }

    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }

    /// Check every structural invariant of the manifest.
    ///
    /// A file's parent must be a declared directory, or an ancestor of one,
    /// from its own group or an earlier group.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.groups.iter().all(ManifestGroup::is_empty) {
            return Err(DomainError::EmptyManifest {
                name: self.name.clone(),
            });
        }

        let mut declared: HashSet<&Path> = HashSet::new();
        let mut available: HashSet<&Path> = HashSet::new();
        let mut files: HashSet<&Path> = HashSet::new();

        for group in &self.groups {
            for dir in &group.directories {
                let path = dir.as_path();
                if !declared.insert(path) {
                    return Err(DomainError::DuplicatePath {
                        path: dir.to_string(),
                    });
                }
                if let Some(file) = dir.ancestors().find(|a| files.contains(a)) {
                    return Err(DomainError::FileShadowsDirectory {
                        path: file.display().to_string(),
                    });
                }
                available.insert(path);
                available.extend(dir.ancestors());
            }

            for file in &group.files {
                let path = file.path.as_path();
                if available.contains(path) {
                    return Err(DomainError::FileShadowsDirectory {
                        path: file.path.to_string(),
                    });
                }
                if !declared.insert(path) {
                    return Err(DomainError::DuplicatePath {
                        path: file.path.to_string(),
                    });
                }
                // Top-level files land directly in the base directory.
                if let Some(parent) = file.path.parent() {
                    if !available.contains(parent.as_path()) {
                        return Err(DomainError::ParentNotDeclared {
                            path: file.path.to_string(),
                        });
                    }
                }
                files.insert(path);
            }
        }

        Ok(())
    }

    /// Flatten into the ordered step list, bound to `base`.
    pub fn to_structure(&self, base: impl Into<PathBuf>) -> ProjectStructure {
        let mut structure = ProjectStructure::new(base);
        for group in &self.groups {
            for dir in &group.directories {
                structure.add_directory(dir.clone());
            }
            for file in &group.files {
                structure.add_file(file.path.clone(), file.content.clone());
            }
        }
        structure
    }
}

/// Builder for [`Manifest`]; `build` validates.
#[derive(Debug)]
pub struct ManifestBuilder {
    name: String,
    groups: Vec<ManifestGroup>,
}

impl ManifestBuilder {
    pub fn group(mut self, group: ManifestGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn build(self) -> Result<Manifest, DomainError> {
        let manifest = Manifest {
            name: self.name,
            groups: self.groups,
        };
        manifest.validate()?;
        Ok(manifest)
    }
}
