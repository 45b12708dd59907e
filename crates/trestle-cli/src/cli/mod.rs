//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// With no subcommand, `trestle` behaves like `trestle generate`.
#[derive(Debug, Parser)]
#[command(
    name    = "trestle",
    bin_name = "trestle",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate the client app's lib/ skeleton",
    long_about = "Trestle creates the fixed lib/ directory tree of the client \
                  application, with empty or one-line placeholder files. \
                  Running it again is safe: directories are kept and files \
                  are rewritten.",
    after_help = "EXAMPLES:\n\
        \x20 trestle                       # scaffold into the current directory\n\
        \x20 trestle generate --root app   # scaffold into ./app\n\
        \x20 trestle generate --dry-run\n\
        \x20 trestle list --format csv\n\
        \x20 trestle completions bash > ~/.local/share/bash-completion/completions/trestle",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute (defaults to `generate`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the skeleton.
    #[command(
        visible_alias = "g",
        about = "Create the lib/ skeleton (default)",
        after_help = "EXAMPLES:\n\
            \x20 trestle generate\n\
            \x20 trestle generate --root ../client\n\
            \x20 trestle generate --dry-run"
    )]
    Generate(GenerateArgs),

    /// Show the built-in manifest.
    #[command(
        visible_alias = "ls",
        about = "List every directory and file the skeleton contains",
        after_help = "EXAMPLES:\n\
            \x20 trestle list\n\
            \x20 trestle list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 trestle completions bash > ~/.local/share/bash-completion/completions/trestle\n\
            \x20 trestle completions zsh  > ~/.zfunc/_trestle\n\
            \x20 trestle completions fish > ~/.config/fish/completions/trestle.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Trestle configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 trestle config get scaffold.root\n\
            \x20 trestle config list\n\
            \x20 trestle config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `trestle generate`.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Base directory the `lib/` tree is created in.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Base directory (default: config scaffold.root, else current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `trestle list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Grouped, human-readable listing.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `trestle completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `trestle config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scaffold.root`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
