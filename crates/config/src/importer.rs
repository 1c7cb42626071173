//! Resolve-then-load driver for a list of `env:` locations.
//!
//! Responsibilities:
//! - Run resolution and loading for each location, in order.
//! - Report per location whether it was loaded or skipped.
//!
//! Does NOT handle:
//! - Merging the resulting property sources.
//! - Locations of other schemes (they fail with `UnsupportedLocation`).
//!
//! Invariants:
//! - The first error stops the import; nothing is retried.
//! - Every location passes through resolution at most once per import.

use crate::config_data::ConfigData;
use crate::data_loader::EnvConfigDataLoader;
use crate::env::EnvLookup;
use crate::error::ConfigDataError;
use crate::location::ConfigDataLocation;
use crate::property::PropertySourceLoaders;
use crate::resolver::EnvConfigDataLocationResolver;
use crate::resource::EnvConfigDataResource;

/// What happened to one imported location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The variable was present and parsed.
    Loaded {
        resource: EnvConfigDataResource,
        data: ConfigData,
    },
    /// The location was optional and its variable was not set.
    Skipped { location: ConfigDataLocation },
}

/// Drives an [`EnvConfigDataLocationResolver`] and an [`EnvConfigDataLoader`]
/// over several locations.
#[derive(Debug, Clone, Default)]
pub struct EnvConfigDataImporter {
    resolver: EnvConfigDataLocationResolver,
    loader: EnvConfigDataLoader,
}

impl EnvConfigDataImporter {
    pub fn new(resolver: EnvConfigDataLocationResolver, loader: EnvConfigDataLoader) -> Self {
        Self { resolver, loader }
    }

    /// Importer whose resolver and loader share one lookup.
    pub fn with_lookup(loaders: PropertySourceLoaders, read_env: EnvLookup) -> Self {
        Self::new(
            EnvConfigDataLocationResolver::with_lookup(loaders, read_env.clone()),
            EnvConfigDataLoader::with_lookup(read_env),
        )
    }

    pub fn resolver(&self) -> &EnvConfigDataLocationResolver {
        &self.resolver
    }

    pub fn loader(&self) -> &EnvConfigDataLoader {
        &self.loader
    }

    /// Resolve and load `locations` in order.
    ///
    /// # Errors
    ///
    /// Returns the first resolution or loading error encountered.
    pub fn import(
        &self,
        locations: &[ConfigDataLocation],
    ) -> Result<Vec<ImportOutcome>, ConfigDataError> {
        let mut outcomes = Vec::with_capacity(locations.len());
        for location in locations {
            let resources = self.resolver.resolve(location)?;
            if resources.is_empty() {
                outcomes.push(ImportOutcome::Skipped {
                    location: location.clone(),
                });
                continue;
            }
            for resource in resources {
                let data = self.loader.load(&resource)?;
                outcomes.push(ImportOutcome::Loaded { resource, data });
            }
        }
        tracing::debug!(
            locations = locations.len(),
            outcomes = outcomes.len(),
            "imported env config data"
        );
        Ok(outcomes)
    }
}
