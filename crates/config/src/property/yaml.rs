//! Loader for YAML content.
//!
//! A single document is supported. The root must be a mapping (an empty
//! document is accepted) and is flattened into dotted property names.

use super::flatten::flatten_yaml;
use super::{PropertySource, PropertySourceLoader};
use crate::error::ConfigDataError;

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlPropertySourceLoader;

impl PropertySourceLoader for YamlPropertySourceLoader {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["yml", "yaml"]
    }

    fn load(&self, name: &str, content: &str) -> Result<PropertySource, ConfigDataError> {
        let parse_error = |message: String| ConfigDataError::Parse {
            source_name: name.to_string(),
            message,
        };

        let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| {
            parse_error(match e.location() {
                Some(location) => format!(
                    "invalid YAML at line {} column {}",
                    location.line(),
                    location.column()
                ),
                None => "invalid YAML document".to_string(),
            })
        })?;

        let mut source = PropertySource::new(name);
        match value {
            serde_yaml::Value::Mapping(_) => {
                flatten_yaml(&value, "", &mut source).map_err(parse_error)?
            }
            serde_yaml::Value::Null => {}
            _ => return Err(parse_error("document root must be a mapping".to_string())),
        }
        Ok(source)
    }
}
