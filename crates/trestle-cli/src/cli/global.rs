//! Flags accepted before or after any subcommand, including the bare
//! `trestle` run that scaffolds straight away.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Diagnostics on stderr; stdout keeps only the `Created ...` lines.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "More diagnostics on stderr; stdout is unaffected:
    (none)  - only warnings, e.g. a progress line that could not be printed
    -v      - manifest size before the run, directory/file counts after it
    -vv     - one event per directory ensured or file written
    -vvv    - every raw create_dir_all / write call"
    )]
    pub verbose: u8,

    /// Drop the `Created ...` lines and the completion message.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing unless the run fails"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file that must exist; without it the default location is used if present.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    /// Output format. `auto` defers to the config file, then to TTY detection.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of the progress lines and summaries on stdout.
///
/// Also the type of `output.format` in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured paths and a ✓ before the completion message.
    Human,
    /// The bare `Created ...` lines.
    Plain,
    /// One `{"event": ..., "path": ...}` object per step, then a summary.
    Json,
}
