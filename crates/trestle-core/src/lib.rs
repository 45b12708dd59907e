//! Trestle Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Trestle
//! skeleton generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           trestle-cli (CLI)             │
//! │   (Console reporter, config, logging)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, ProgressReporter)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   trestle-adapters (Infrastructure)     │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Manifest, RelativePath, Structure)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trestle_core::prelude::*;
//!
//! # fn demo(fs: Box<dyn Filesystem>) -> TrestleResult<()> {
//! let manifest = Manifest::builder("demo")
//!     .group(ManifestGroup::new("root").with_directory("lib")?.with_file("lib/main.dart", "")?)
//!     .build()?;
//!
//! let service = ScaffoldService::new(fs);
//! service.scaffold(&manifest, ".", &NullReporter)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EntryInfo, EntryKind, NullReporter, ScaffoldService, ScaffoldSummary,
        ports::{Filesystem, ProgressReporter},
    };
    pub use crate::domain::{FileSpec, Manifest, ManifestGroup, ProjectStructure, RelativePath};
    pub use crate::error::{TrestleError, TrestleResult};
}
