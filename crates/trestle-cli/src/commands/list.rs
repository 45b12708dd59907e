//! Implementation of the `trestle list` command.

use std::borrow::Cow;

use trestle_adapters::builtin_manifest;
use trestle_core::{
    application::{EntryKind, ScaffoldService},
    error::TrestleError,
};

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let manifest = builtin_manifest::client_app().map_err(TrestleError::from)?;
    let entries = ScaffoldService::list_entries(&manifest);

    match args.format {
        ListFormat::Table => {
            output.header(&format!(
                "{} ({} directories, {} files)",
                manifest.name(),
                manifest.directory_count(),
                manifest.file_count()
            ))?;
            let mut current_group = None;
            for entry in &entries {
                if current_group != Some(entry.group.as_str()) {
                    current_group = Some(entry.group.as_str());
                    output.print(&format!("\n[{}]", entry.group))?;
                }
                let suffix = match (&entry.kind, &entry.content) {
                    (EntryKind::Directory, _) => "/".to_string(),
                    (EntryKind::File, Some(stub)) => format!("  \"{stub}\""),
                    (EntryKind::File, None) => String::new(),
                };
                output.print(&format!("  {}{suffix}", entry.path))?;
            }
        }

        ListFormat::Json => {
            // Printed directly so the array stays parseable even with --quiet.
            let json = serde_json::to_string_pretty(&entries).map_err(|e| CliError::IoError {
                message: format!("Failed to serialise manifest: {e}"),
                source: e.into(),
            })?;
            println!("{json}");
        }

        ListFormat::List => {
            for entry in &entries {
                println!("{}", entry.path);
            }
        }

        ListFormat::Csv => {
            println!("group,kind,path,content");
            for entry in &entries {
                println!(
                    "{},{},{},{}",
                    csv_field(&entry.group),
                    entry.kind,
                    csv_field(&entry.path),
                    csv_field(entry.content.as_deref().unwrap_or_default())
                );
            }
        }
    }

    Ok(())
}

/// Quote a CSV field when it holds a comma, quote or line break (RFC 4180).
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_field_is_untouched() {
        assert_eq!(csv_field("# Base API client"), "# Base API client");
        assert!(matches!(csv_field("lib/app.dart"), Cow::Borrowed(_)));
    }

    #[test]
    fn comma_field_is_quoted() {
        assert_eq!(csv_field("# Routes, guards"), "\"# Routes, guards\"");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(csv_field(r#"say "hi""#), r#""say ""hi""""#);
    }

    #[test]
    fn line_break_is_quoted() {
        assert_eq!(csv_field("a\nb"), "\"a\nb\"");
    }
}
