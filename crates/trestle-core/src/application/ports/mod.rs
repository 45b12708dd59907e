//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory and file operations
//!   - `ProgressReporter`: per-step notifications

pub mod output;

pub use output::{Filesystem, NullReporter, ProgressReporter};

#[cfg(test)]
pub use output::MockFilesystem;
