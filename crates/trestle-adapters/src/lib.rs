//! Infrastructure adapters for Trestle.
//!
//! This crate implements the ports defined in `trestle-core::application::ports`
//! and ships the built-in manifest. It contains all I/O.

pub mod builtin_manifest;
pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
