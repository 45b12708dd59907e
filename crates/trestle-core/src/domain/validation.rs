use crate::domain::{entities::Manifest, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across call sites.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_manifest(manifest: &Manifest) -> Result<(), DomainError> {
        manifest.validate()
    }
}
