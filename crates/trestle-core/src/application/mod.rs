//! Application layer for Trestle.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! manifest rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    EntryInfo, // DTO for manifest listings
    EntryKind,
    ScaffoldService,
    ScaffoldSummary,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, NullReporter, ProgressReporter};

pub use error::{ApplicationError, FsOperation};
