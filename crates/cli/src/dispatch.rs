//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the resolve and load handlers.
//! - Write formatted results to stdout.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).
//!
//! Invariants:
//! - Locations are processed in argument order; the first failure stops the run.
//! - Nothing is printed to stdout when a command fails.

use anyhow::{Context, Result};
use envdata_config::{EnvConfigDataImporter, EnvConfigDataLocationResolver};

use crate::args::{Cli, Commands, parse_locations};
use crate::formatters::{LoadedOutput, OutputFormat, ResolvedOutput, get_formatter};

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let formatter = get_formatter(OutputFormat::from_str(&cli.output)?);

    let output = match cli.command {
        Commands::Resolve { locations } => {
            let resolver = EnvConfigDataLocationResolver::new();
            let mut rows = Vec::new();
            for location in parse_locations(&locations)? {
                let resources = resolver
                    .resolve(&location)
                    .with_context(|| format!("Failed to resolve '{}'", location))?;
                if resources.is_empty() {
                    rows.push(ResolvedOutput::skipped(&location));
                }
                rows.extend(resources.iter().map(ResolvedOutput::resolved));
            }
            tracing::debug!(rows = rows.len(), "resolved locations");
            formatter.format_resolved(&rows)?
        }
        Commands::Load { locations } => {
            let locations = parse_locations(&locations)?;
            let outcomes = EnvConfigDataImporter::default()
                .import(&locations)
                .context("Failed to load config data")?;
            let rows: Vec<LoadedOutput> = outcomes
                .into_iter()
                .flat_map(LoadedOutput::from_outcome)
                .collect();
            formatter.format_loaded(&rows)?
        }
    };

    print!("{}", output);
    Ok(())
}
