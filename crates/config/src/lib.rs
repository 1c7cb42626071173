//! Config data from environment variables.
//!
//! This crate resolves `env:` locations such as `env:APP_CONFIG` or
//! `optional:env:APP_CONFIG[.yaml]` into resources, then loads each
//! resource by parsing the variable's content with a format-specific
//! loader.

pub mod constants;
mod config_data;
mod data_loader;
pub mod env;
mod error;
mod importer;
mod location;
pub mod property;
mod resolver;
mod resource;

pub use config_data::ConfigData;
pub use data_loader::EnvConfigDataLoader;
pub use env::{EnvLookup, load_dotenv, snapshot_lookup, system_lookup};
pub use error::ConfigDataError;
pub use importer::{EnvConfigDataImporter, ImportOutcome};
pub use location::ConfigDataLocation;
pub use property::{PropertySource, PropertySourceLoader, PropertySourceLoaders};
pub use resolver::EnvConfigDataLocationResolver;
pub use resource::EnvConfigDataResource;

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}

#[cfg(test)]
mod tests;
