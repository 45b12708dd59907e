//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the manifest
//! 2. Flatten it into an ordered [`ProjectStructure`]
//! 3. Walk the structure against the filesystem port, reporting each step
//!
//! The first failing step aborts the run. Nothing is retried or rolled back;
//! every step is an ensure or an overwrite, so a rerun starts clean.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ProgressReporter},
    domain::{DomainValidator as validator, FsEntry, Manifest, ProjectStructure},
    error::TrestleResult,
};

/// One manifest entry, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    pub group: String,
    pub kind: EntryKind,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Counts of what a completed run touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldSummary {
    pub base: PathBuf,
    pub directories: usize,
    pub files: usize,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service over the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use trestle_core::application::{NullReporter, ScaffoldService};
    ///
    /// # fn demo(fs: Box<dyn trestle_core::application::Filesystem>,
    /// #         manifest: trestle_core::domain::Manifest) {
    /// let service = ScaffoldService::new(fs);
    /// service.scaffold(&manifest, ".", &NullReporter).unwrap();
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialize `manifest` under `base`.
    ///
    /// `reporter` hears about every step right after it succeeds, so on
    /// failure it has seen exactly the steps that completed.
    #[instrument(
        skip_all,
        fields(
            manifest = %manifest.name(),
            base = %base.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        manifest: &Manifest,
        base: impl AsRef<Path>,
        reporter: &dyn ProgressReporter,
    ) -> TrestleResult<ScaffoldSummary> {
        info!(
            directories = manifest.directory_count(),
            files = manifest.file_count(),
            "Scaffolding"
        );

        let structure = Self::plan(manifest, base)?;
        let summary = self.write_structure(&structure, reporter)?;

        info!("Scaffold completed successfully");
        Ok(summary)
    }

    /// Validate and flatten without touching the filesystem.
    pub fn plan(manifest: &Manifest, base: impl AsRef<Path>) -> TrestleResult<ProjectStructure> {
        validator::validate_manifest(manifest)?;
        Ok(manifest.to_structure(base.as_ref()))
    }

    /// Every entry of `manifest`, in execution order.
    pub fn list_entries(manifest: &Manifest) -> Vec<EntryInfo> {
        let mut out = Vec::with_capacity(manifest.directory_count() + manifest.file_count());
        for group in manifest.groups() {
            out.extend(group.directories().iter().map(|d| EntryInfo {
                group: group.name().to_string(),
                kind: EntryKind::Directory,
                path: d.to_string(),
                content: None,
            }));
            out.extend(group.files().iter().map(|f| EntryInfo {
                group: group.name().to_string(),
                kind: EntryKind::File,
                path: f.path().to_string(),
                content: f.has_stub().then(|| f.content().to_string()),
            }));
        }
        out
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_structure(
        &self,
        structure: &ProjectStructure,
        reporter: &dyn ProgressReporter,
    ) -> TrestleResult<ScaffoldSummary> {
        let mut summary = ScaffoldSummary {
            base: structure.base().to_path_buf(),
            directories: 0,
            files: 0,
        };

        for entry in structure.entries() {
            let target = structure.base().join(entry.path());
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&target)?;
                    debug!(path = %dir.path, "directory ensured");
                    reporter.directory_created(dir.path.as_path());
                    summary.directories += 1;
                }
                FsEntry::File(file) => {
                    self.filesystem.write_file(&target, &file.content)?;
                    debug!(path = %file.path, bytes = file.size(), "file written");
                    reporter.file_created(file.path.as_path());
                    summary.files += 1;
                }
            }
        }

        Ok(summary)
    }
}
