//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn raw location arguments into parsed locations.
//!
//! Non-responsibilities:
//! - Does not resolve or load anything (see `dispatch` module).

use anyhow::Result;
use clap::{Parser, Subcommand};
use envdata_config::ConfigDataLocation;

#[derive(Parser)]
#[command(name = "envdata")]
#[command(about = "Resolve and load config data from environment variables", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envdata load env:APP_CONFIG\n  envdata load 'optional:env:APP_CONFIG[.yaml]'\n  envdata --output json resolve 'env:DB_CONFIG;optional:env:CACHE_CONFIG[.json]'\n"
)]
pub struct Cli {
    /// Output format (properties, json, yaml)
    #[arg(
        short,
        long,
        global = true,
        default_value = "properties",
        env = "ENVDATA_OUTPUT"
    )]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve locations to the variables and loaders they select, without loading
    Resolve {
        /// Locations such as env:APP_CONFIG or optional:env:APP_CONFIG[.yaml]
        ///
        /// A single argument may hold several locations separated by ';'.
        #[arg(required = true, value_name = "LOCATION")]
        locations: Vec<String>,
    },

    /// Resolve and load locations, printing one property source per variable
    Load {
        /// Locations such as env:APP_CONFIG or optional:env:APP_CONFIG[.yaml]
        ///
        /// A single argument may hold several locations separated by ';'.
        #[arg(required = true, value_name = "LOCATION")]
        locations: Vec<String>,
    },
}

/// Parse location arguments, expanding `;`-delimited lists.
pub fn parse_locations(raw: &[String]) -> Result<Vec<ConfigDataLocation>> {
    let mut locations = Vec::new();
    for value in raw {
        let Some(location) = ConfigDataLocation::of(value) else {
            anyhow::bail!("Location must not be blank");
        };
        locations.extend(location.split());
    }
    Ok(locations)
}
