//! Implementation of `trestle generate`, also the default command.

use serde::Serialize;
use tracing::{debug, info};

use trestle_adapters::{LocalFilesystem, builtin_manifest};
use trestle_core::{
    application::{ScaffoldService, ScaffoldSummary},
    domain::FsEntry,
    error::TrestleError,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

const COMPLETED: &str = "Project structure created successfully!";

#[derive(Serialize)]
struct Completed<'a> {
    event: &'static str,
    #[serde(flatten)]
    summary: &'a ScaffoldSummary,
}

#[derive(Serialize)]
struct Planned<'a> {
    event: &'static str,
    kind: &'static str,
    path: &'a str,
}

pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let base = args.root.unwrap_or(config.scaffold.root);
    debug!(base = %base.display(), dry_run = args.dry_run, "generate");

    let manifest = builtin_manifest::client_app().map_err(TrestleError::from)?;

    if args.dry_run {
        let structure = ScaffoldService::plan(&manifest, &base)?;
        for entry in structure.entries() {
            let kind = match entry {
                FsEntry::Directory(_) => "directory",
                FsEntry::File(_) => "file",
            };
            let path = entry.path().to_string();
            if output.format() == OutputFormat::Json {
                output.json(&Planned {
                    event: "planned",
                    kind,
                    path: &path,
                })?;
            } else {
                output.print(&format!("Would create {kind}: {path}"))?;
            }
        }
        if output.format() != OutputFormat::Json {
            output.info(&format!(
                "Dry run: {} steps under {}, nothing written",
                structure.entry_count(),
                base.display()
            ))?;
        }
        return Ok(());
    }

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let summary = service.scaffold(&manifest, &base, &output)?;
    info!(
        directories = summary.directories,
        files = summary.files,
        "skeleton written"
    );

    match output.format() {
        OutputFormat::Json => output.json(&Completed {
            event: "completed",
            summary: &summary,
        })?,
        _ if output.supports_color() => output.success(COMPLETED)?,
        _ => output.print(COMPLETED)?,
    }

    Ok(())
}
