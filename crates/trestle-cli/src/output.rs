//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::warn;
use trestle_core::application::ProgressReporter;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // An explicit flag wins; `auto` falls back to the config file value.
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format,
            explicit => explicit,
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// One compact JSON document per line.  Suppressed in quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = serde_json::to_string(value).map_err(io::Error::other)?;
        self.term.write_line(&line)
    }

    /// `Created <kind>: <path>`, the per-step progress line.
    fn created(&self, kind: &str, path: &Path) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let path = path.display().to_string();
        let line = if self.no_color {
            format!("Created {kind}: {path}")
        } else {
            format!("Created {kind}: {}", path.cyan())
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

#[derive(Serialize)]
struct StepEvent<'a> {
    event: &'static str,
    path: &'a str,
}

impl OutputManager {
    fn report(&self, kind: &str, event: &'static str, path: &Path) {
        let result = if self.resolved_format == OutputFormat::Json {
            self.json(&StepEvent {
                event,
                path: &path.to_string_lossy(),
            })
        } else {
            self.created(kind, path)
        };
        // The step itself succeeded; a closed stdout must not abort the run.
        if let Err(e) = result {
            warn!(error = %e, path = %path.display(), "failed to write progress line");
        }
    }
}

impl ProgressReporter for OutputManager {
    fn directory_created(&self, path: &Path) {
        self.report("directory", "directory_created", path);
    }

    fn file_created(&self, path: &Path) {
        self.report("file", "file_created", path);
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
