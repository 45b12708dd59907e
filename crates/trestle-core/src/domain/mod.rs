// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Trestle.
//!
//! This module contains pure manifest logic with no I/O. Filesystem access
//! goes through the ports defined in the application layer.
//!
//! - **No I/O**: No filesystem or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: Manifests are built once and only read afterwards
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    manifest::{FileSpec, Manifest, ManifestBuilder, ManifestGroup},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
};

pub use error::DomainError;

pub use validation::DomainValidator;
