pub mod common;
pub mod manifest;
pub mod project_structure;

pub use crate::domain::DomainError;
pub use manifest::{FileSpec, Manifest, ManifestBuilder, ManifestGroup};
pub use project_structure::ProjectStructure;
