//! Loader capability and the ordered loader registry.
//!
//! Responsibilities:
//! - Define the `PropertySourceLoader` trait implemented by content formats.
//! - Keep an ordered registry and pick the first loader supporting an extension.
//!
//! Does NOT handle:
//! - Stripping the leading dot from extensions (the resolver does that).
//!
//! Invariants:
//! - Extension matching is ASCII case-insensitive.
//! - Registry order is significant: the first match wins.

use std::fmt;
use std::sync::Arc;

use super::{
    JsonPropertySourceLoader, PropertiesPropertySourceLoader, PropertySource,
    YamlPropertySourceLoader,
};
use crate::error::ConfigDataError;

/// Parses raw text of one format into a [`PropertySource`].
pub trait PropertySourceLoader: fmt::Debug + Send + Sync {
    /// Stable identifier, used for resource equality and diagnostics.
    fn name(&self) -> &'static str;

    /// Extensions handled by this loader, without a leading dot.
    fn file_extensions(&self) -> &'static [&'static str];

    /// Whether `extension` (without dot) is handled by this loader.
    fn supports(&self, extension: &str) -> bool {
        self.file_extensions()
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(extension))
    }

    /// Parse `content` into a property source called `name`.
    fn load(&self, name: &str, content: &str) -> Result<PropertySource, ConfigDataError>;
}

/// Ordered set of loaders available to the resolver.
///
/// `Default` registers the built-in loaders: properties, YAML, JSON.
#[derive(Debug, Clone)]
pub struct PropertySourceLoaders {
    loaders: Vec<Arc<dyn PropertySourceLoader>>,
}

impl Default for PropertySourceLoaders {
    fn default() -> Self {
        Self::new(vec![
            Arc::new(PropertiesPropertySourceLoader),
            Arc::new(YamlPropertySourceLoader),
            Arc::new(JsonPropertySourceLoader),
        ])
    }
}

impl PropertySourceLoaders {
    pub fn new(loaders: Vec<Arc<dyn PropertySourceLoader>>) -> Self {
        Self { loaders }
    }

    /// A registry with no loaders at all.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Append a loader; it is consulted after the ones already registered.
    pub fn with_loader(mut self, loader: Arc<dyn PropertySourceLoader>) -> Self {
        self.loaders.push(loader);
        self
    }

    /// The first loader supporting `extension` (without dot).
    pub fn find(&self, extension: &str) -> Option<Arc<dyn PropertySourceLoader>> {
        self.loaders
            .iter()
            .find(|loader| loader.supports(extension))
            .cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn PropertySourceLoader>> {
        self.loaders.iter()
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct ShadowLoader;

    impl PropertySourceLoader for ShadowLoader {
        fn name(&self) -> &'static str {
            "shadow"
        }

        fn file_extensions(&self) -> &'static [&'static str] {
            &["properties", "ini"]
        }

        fn load(&self, name: &str, _content: &str) -> Result<PropertySource, ConfigDataError> {
            Ok(PropertySource::new(name))
        }
    }

    #[test]
    fn test_default_registry_order() {
        let loaders = PropertySourceLoaders::default();
        let names: Vec<_> = loaders.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["properties", "yaml", "json"]);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let loaders = PropertySourceLoaders::default();
        assert_eq!(loaders.find("YAML").unwrap().name(), "yaml");
        assert_eq!(loaders.find("Yml").unwrap().name(), "yaml");
        assert_eq!(loaders.find("JSON").unwrap().name(), "json");
        assert_eq!(loaders.find("Properties").unwrap().name(), "properties");
    }

    #[test]
    fn test_find_unknown_extension() {
        let loaders = PropertySourceLoaders::default();
        assert!(loaders.find("toml").is_none());
        assert!(loaders.find("").is_none());
        assert!(PropertySourceLoaders::empty().find("properties").is_none());
    }

    #[test]
    fn test_first_registered_loader_wins() {
        let loaders = PropertySourceLoaders::default().with_loader(Arc::new(ShadowLoader));
        assert_eq!(loaders.len(), 4);
        assert_eq!(loaders.find("properties").unwrap().name(), "properties");
        assert_eq!(loaders.find("ini").unwrap().name(), "shadow");
    }
}
