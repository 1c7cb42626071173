//! Resolved `env:` resources.
//!
//! A resource binds a location to the variable it names and the loader
//! chosen for the variable's content. It is produced once by the resolver
//! and handed to the loader.

use std::fmt;
use std::sync::Arc;

use crate::location::ConfigDataLocation;
use crate::property::PropertySourceLoader;

/// An environment variable resolved from an `env:` location.
#[derive(Debug, Clone)]
pub struct EnvConfigDataResource {
    location: ConfigDataLocation,
    variable_name: String,
    loader: Arc<dyn PropertySourceLoader>,
}

impl EnvConfigDataResource {
    pub fn new(
        location: ConfigDataLocation,
        variable_name: impl Into<String>,
        loader: Arc<dyn PropertySourceLoader>,
    ) -> Self {
        Self {
            location,
            variable_name: variable_name.into(),
            loader,
        }
    }

    pub fn location(&self) -> &ConfigDataLocation {
        &self.location
    }

    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }

    /// The loader selected for the variable's content.
    pub fn loader(&self) -> &Arc<dyn PropertySourceLoader> {
        &self.loader
    }
}

impl PartialEq for EnvConfigDataResource {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
            && self.variable_name == other.variable_name
            && self.loader.name() == other.loader.name()
    }
}

impl Eq for EnvConfigDataResource {}

impl fmt::Display for EnvConfigDataResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "env variable [{}]", self.variable_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{PropertiesPropertySourceLoader, YamlPropertySourceLoader};

    fn resource(variable: &str, loader: Arc<dyn PropertySourceLoader>) -> EnvConfigDataResource {
        let location = ConfigDataLocation::of(&format!("env:{}", variable)).unwrap();
        EnvConfigDataResource::new(location, variable, loader)
    }

    #[test]
    fn test_display_names_variable() {
        let r = resource("VAR1", Arc::new(PropertiesPropertySourceLoader));
        assert_eq!(r.to_string(), "env variable [VAR1]");
    }

    #[test]
    fn test_equality_compares_location_variable_and_loader() {
        let a = resource("VAR1", Arc::new(PropertiesPropertySourceLoader));
        let b = resource("VAR1", Arc::new(PropertiesPropertySourceLoader));
        let other_loader = resource("VAR1", Arc::new(YamlPropertySourceLoader));
        let other_variable = resource("VAR2", Arc::new(PropertiesPropertySourceLoader));

        assert_eq!(a, b);
        assert_ne!(a, other_loader);
        assert_ne!(a, other_variable);
    }

    #[test]
    fn test_accessors() {
        let r = resource("VAR1", Arc::new(YamlPropertySourceLoader));
        assert_eq!(r.variable_name(), "VAR1");
        assert_eq!(r.location().value(), "env:VAR1");
        assert_eq!(r.loader().name(), "yaml");
    }
}
