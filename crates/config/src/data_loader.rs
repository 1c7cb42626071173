//! Loading of resolved `env:` resources.
//!
//! Responsibilities:
//! - Re-read the resource's variable from the current environment.
//! - Parse the raw value with the resource's loader into `ConfigData`.
//!
//! Does NOT handle:
//! - Optional locations. Optionality is settled during resolution, so a
//!   variable missing at load time is always an error.
//! - Caching. Every call reads and parses again.
//!
//! Invariants:
//! - The value reaches the loader untouched.
//! - The property source is named after the resource (`env variable [<name>]`).

use std::fmt;

use crate::config_data::ConfigData;
use crate::env::{EnvLookup, system_lookup};
use crate::error::ConfigDataError;
use crate::resource::EnvConfigDataResource;

/// Loads [`EnvConfigDataResource`]s produced by the resolver.
#[derive(Clone)]
pub struct EnvConfigDataLoader {
    read_env: EnvLookup,
}

impl Default for EnvConfigDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvConfigDataLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConfigDataLoader").finish_non_exhaustive()
    }
}

impl EnvConfigDataLoader {
    /// Loader reading the process environment.
    pub fn new() -> Self {
        Self::with_lookup(system_lookup())
    }

    pub fn with_lookup(read_env: EnvLookup) -> Self {
        Self { read_env }
    }

    /// Every `env:` resource can be handed to this loader.
    pub fn is_loadable(&self, _resource: &EnvConfigDataResource) -> bool {
        true
    }

    /// Read and parse the variable behind `resource`.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the variable is no longer set.
    /// - `Parse` if the loader rejects the content.
    pub fn load(&self, resource: &EnvConfigDataResource) -> Result<ConfigData, ConfigDataError> {
        let name = resource.to_string();
        let Some(content) = (self.read_env)(resource.variable_name()) else {
            return Err(ConfigDataError::ResourceNotFound { resource: name });
        };

        let property_source = resource.loader().load(&name, &content)?;
        tracing::debug!(
            resource = %name,
            loader = resource.loader().name(),
            properties = property_source.len(),
            "loaded env config data"
        );
        Ok(ConfigData::new(vec![property_source]))
    }
}
