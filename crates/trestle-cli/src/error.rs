//! Error handling for the Trestle CLI.
//!
//! Every failure that reaches `main` is a [`CliError`].  It carries the
//! underlying message verbatim, a list of suggestions, and an exit code.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use trestle_core::error::{ErrorCategory as CoreCategory, TrestleError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not rule out.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or serialised.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// A scaffold run aborted inside `trestle-core`.
    #[error(transparent)]
    Core(#[from] TrestleError),

    // ── System errors ──────────────────────────────────────────────────────
    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Wrap an `anyhow` error from the config loader, keeping its context chain.
    pub fn config(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { .. } => vec![
                "Check the file passed to --config, or the default config file".into(),
                "Show the default location: trestle config path".into(),
                "Run without a config file to fall back to built-in defaults".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } => vec![
                "Output could not be written; check that stdout is still open".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            // Both a broken manifest and a failed step abort the run.
            Self::Core(core) => match core.category() {
                CoreCategory::Manifest | CoreCategory::Filesystem => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(), // ✗
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Scaffold aborted: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error.
    UserError,
    /// Configuration error.
    Configuration,
    /// Filesystem or other runtime failure.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use trestle_core::application::{ApplicationError, FsOperation};
    use trestle_core::domain::DomainError;

    fn permission_denied() -> CliError {
        let app = ApplicationError::filesystem(
            "lib/providers/auth_provider.dart",
            FsOperation::WriteFile,
            &io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied (os error 13)"),
        );
        CliError::Core(app.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        let err = CliError::InvalidInput {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::config(anyhow::anyhow!("bad toml"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_filesystem_failure() {
        assert_eq!(permission_denied().exit_code(), 1);
    }

    #[test]
    fn exit_code_invalid_manifest() {
        let err = CliError::Core(TrestleError::Domain(DomainError::DuplicatePath {
            path: "lib".into(),
        }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn exit_code_io() {
        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert_eq!(err.exit_code(), 1);
    }

    // ── messages ──────────────────────────────────────────────────────────

    #[test]
    fn core_message_is_passed_through() {
        assert_eq!(
            permission_denied().to_string(),
            "Failed to write file lib/providers/auth_provider.dart: Permission denied (os error 13)"
        );
    }

    #[test]
    fn config_error_keeps_context_chain() {
        let err = CliError::config(
            anyhow::anyhow!("expected `]`").context("failed to read configuration from x.toml"),
        );
        let msg = err.to_string();
        assert!(msg.contains("failed to read configuration from x.toml"));
        assert!(msg.contains("expected `]`"));
    }

    #[test]
    fn filesystem_suggestions_come_from_core() {
        let err = permission_denied();
        assert!(err.suggestions().iter().any(|s| s.contains("Re-running")));
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = permission_denied().format_plain(false);
        assert!(s.contains("Error: Failed to write file"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = CliError::config(anyhow::anyhow!("x")).format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn format_colored_contains_message() {
        let s = permission_denied().format_colored(false);
        assert!(s.contains("auth_provider.dart"));
    }
}
