//! Resolution of `env:` locations into resources.
//!
//! Responsibilities:
//! - Recognise `env:` locations.
//! - Split the payload into variable name and optional `[.ext]` hint.
//! - Select the content loader for the hinted (or default) extension.
//! - Decide between one resource, no resource (optional), or failure.
//!
//! Does NOT handle:
//! - Reading or parsing variable content (see `data_loader.rs`).
//! - Parsing the `optional:` marker (see `location.rs`).
//!
//! Invariants:
//! - Loader selection happens before the variable lookup, so an unknown
//!   extension fails whether or not the variable is set.
//! - A resource is only produced when the variable is present.
//! - A malformed hint is never an error; the whole payload becomes the name.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::constants::{DEFAULT_EXTENSION, ENV_PREFIX};
use crate::env::{EnvLookup, system_lookup};
use crate::error::ConfigDataError;
use crate::location::ConfigDataLocation;
use crate::property::{PropertySourceLoader, PropertySourceLoaders};
use crate::resource::EnvConfigDataResource;

/// `<name>[.<ext>]` where `<name>` does not itself end in a bracket group.
static EXTENSION_HINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:.*[^\]])?)\[(\.[A-Za-z0-9_]+)\]$")
        .expect("BUG: invalid EXTENSION_HINT_RE regex literal")
});

/// Split a payload into variable name and extension hint (with its dot).
pub(crate) fn split_extension_hint(payload: &str) -> (&str, Option<&str>) {
    match EXTENSION_HINT_RE.captures(payload) {
        Some(captures) => {
            let name = captures.get(1).map_or("", |m| m.as_str());
            let extension = captures.get(2).map(|m| m.as_str());
            (name, extension)
        }
        None => (payload, None),
    }
}

/// Resolves `env:` locations against an injected environment lookup.
#[derive(Clone)]
pub struct EnvConfigDataLocationResolver {
    loaders: PropertySourceLoaders,
    read_env: EnvLookup,
}

impl Default for EnvConfigDataLocationResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvConfigDataLocationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConfigDataLocationResolver")
            .field("loaders", &self.loaders)
            .finish_non_exhaustive()
    }
}

impl EnvConfigDataLocationResolver {
    /// Resolver using the built-in loaders and the process environment.
    pub fn new() -> Self {
        Self::with_lookup(PropertySourceLoaders::default(), system_lookup())
    }

    /// Resolver with explicit loaders and environment lookup.
    pub fn with_lookup(loaders: PropertySourceLoaders, read_env: EnvLookup) -> Self {
        Self { loaders, read_env }
    }

    /// Whether `location` uses the `env:` scheme.
    pub fn is_resolvable(&self, location: &ConfigDataLocation) -> bool {
        location.has_prefix(ENV_PREFIX)
    }

    /// Resolve `location` into zero or one resources.
    ///
    /// # Errors
    ///
    /// - `UnsupportedLocation` if the location is not an `env:` location.
    /// - `UnknownExtension` if no loader supports the requested extension.
    /// - `LocationNotFound` if the variable is unset and the location is required.
    pub fn resolve(
        &self,
        location: &ConfigDataLocation,
    ) -> Result<Vec<EnvConfigDataResource>, ConfigDataError> {
        if !self.is_resolvable(location) {
            return Err(ConfigDataError::UnsupportedLocation {
                location: location.to_string(),
            });
        }

        let payload = location.non_prefixed_value(ENV_PREFIX);
        let (variable_name, extension) = split_extension_hint(payload);
        tracing::trace!(
            location = %location,
            variable = variable_name,
            extension = ?extension,
            "parsed env location"
        );

        let loader = self.loader_for(extension.unwrap_or(DEFAULT_EXTENSION))?;

        if (self.read_env)(variable_name).is_some() {
            tracing::debug!(
                location = %location,
                variable = variable_name,
                loader = loader.name(),
                "resolved env location"
            );
            return Ok(vec![EnvConfigDataResource::new(
                location.clone(),
                variable_name,
                loader,
            )]);
        }

        if location.is_optional() {
            tracing::debug!(
                location = %location,
                variable = variable_name,
                "skipping optional env location, variable not set"
            );
            return Ok(Vec::new());
        }

        Err(ConfigDataError::location_not_found(location, variable_name))
    }

    fn loader_for(
        &self,
        extension: &str,
    ) -> Result<Arc<dyn PropertySourceLoader>, ConfigDataError> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        let loader = self
            .loaders
            .find(extension)
            .ok_or_else(|| ConfigDataError::UnknownExtension {
                extension: extension.to_string(),
            })?;
        tracing::trace!(extension, loader = loader.name(), "selected loader");
        Ok(loader)
    }
}
