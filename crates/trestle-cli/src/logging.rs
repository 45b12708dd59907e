//! Diagnostics on stderr.
//!
//! stdout belongs to the `Created ...` lines, so every tracing event goes to
//! stderr.  Only the binary installs a subscriber; `trestle-core` and
//! `trestle-adapters` just emit.
//!
//! What each level shows during a scaffold run:
//!
//! | Flag(s)   | Level | Adds                                              |
//! |-----------|-------|---------------------------------------------------|
//! | `--quiet` | ERROR | the abort reason only                             |
//! | (none)    | WARN  | progress lines that could not be printed          |
//! | `-v`      | INFO  | manifest size before the run, counts after it     |
//! | `-vv`     | DEBUG | one event per directory ensured or file written   |
//! | `-vvv`    | TRACE | every raw `create_dir_all` / `write` call         |
//!
//! `RUST_LOG` replaces the whole filter when set.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events pass the default filter.
const LOG_TARGETS: [&str; 3] = ["trestle", "trestle_core", "trestle_adapters"];

/// Install the stderr subscriber.  Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing: {e}"))
}

/// `--quiet` wins over any number of `-v`.
fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `trestle=debug,trestle_core=debug,...`; other crates stay silent.
fn default_directives(level: LevelFilter) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            ..GlobalArgs::default()
        }
    }

    #[test]
    fn default_shows_warnings() {
        assert_eq!(level_for(&args_with(0, false)), LevelFilter::WARN);
    }

    #[test]
    fn each_v_lowers_the_threshold() {
        assert_eq!(level_for(&args_with(1, false)), LevelFilter::INFO);
        assert_eq!(level_for(&args_with(2, false)), LevelFilter::DEBUG);
        assert_eq!(level_for(&args_with(3, false)), LevelFilter::TRACE);
        assert_eq!(level_for(&args_with(10, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_keeps_only_errors() {
        assert_eq!(level_for(&args_with(0, true)), LevelFilter::ERROR);
        assert_eq!(level_for(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_cover_every_workspace_crate() {
        assert_eq!(
            default_directives(LevelFilter::DEBUG),
            "trestle=debug,trestle_core=debug,trestle_adapters=debug"
        );
    }
}
