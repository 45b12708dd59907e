//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file: `--config FILE` (must exist) or the platform default
//!    location (used only if present)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OutputFormat;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Scaffold settings.
    pub scaffold: ScaffoldConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; anything else fails to load.
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Base directory the `lib/` tree is created in.
    pub root: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                no_color: false,
                format: OutputFormat::Auto,
            },
            scaffold: ScaffoldConfig {
                root: PathBuf::from("."),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", "auto")?
            .set_default("scaffold.root", defaults.scaffold.root.to_string_lossy().as_ref())?
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.trestle.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "trestle", "trestle")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".trestle.toml"))
    }

    /// Look up a dotted key, as printed by `trestle config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => self
                .output
                .format
                .to_possible_value()
                .map(|v| v.get_name().to_string()),
            "scaffold.root" => Some(self.scaffold.root.display().to_string()),
            _ => None,
        }
    }

    /// Every key understood by [`Self::get`].
    pub const KEYS: &'static [&'static str] = &["output.no_color", "output.format", "scaffold.root"];
}
