//! Result of loading a resolved resource.

use serde::Serialize;

use crate::property::PropertySource;

/// Config data loaded from a single resource.
///
/// Carries no options or profile metadata; an `env:` resource always
/// produces exactly one property source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigData {
    property_sources: Vec<PropertySource>,
}

impl ConfigData {
    pub fn new(property_sources: Vec<PropertySource>) -> Self {
        Self { property_sources }
    }

    pub fn property_sources(&self) -> &[PropertySource] {
        &self.property_sources
    }

    pub fn into_property_sources(self) -> Vec<PropertySource> {
        self.property_sources
    }
}
