//! Loader for JSON content.
//!
//! The document root must be an object; it is flattened into dotted
//! property names. Blank content yields an empty property source.

use super::flatten::flatten_json;
use super::{PropertySource, PropertySourceLoader};
use crate::error::ConfigDataError;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPropertySourceLoader;

impl PropertySourceLoader for JsonPropertySourceLoader {
    fn name(&self) -> &'static str {
        "json"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn load(&self, name: &str, content: &str) -> Result<PropertySource, ConfigDataError> {
        let mut source = PropertySource::new(name);
        if content.trim().is_empty() {
            return Ok(source);
        }

        // Only the position is reported; serde_json messages may quote content.
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigDataError::Parse {
                source_name: name.to_string(),
                message: format!(
                    "invalid JSON ({:?}) at line {} column {}",
                    e.classify(),
                    e.line(),
                    e.column()
                ),
            })?;

        match value {
            serde_json::Value::Object(_) => flatten_json(&value, "", &mut source),
            serde_json::Value::Null => {}
            _ => {
                return Err(ConfigDataError::Parse {
                    source_name: name.to_string(),
                    message: "document root must be an object".to_string(),
                });
            }
        }
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nested_object_in_document_order() {
        let source = JsonPropertySourceLoader
            .load(
                "test",
                r#"{"zeta": 1, "app": {"name": "demo", "enabled": true}, "tags": ["x"]}"#,
            )
            .unwrap();

        assert_eq!(
            source.keys().collect::<Vec<_>>(),
            vec!["zeta", "app.name", "app.enabled", "tags[0]"]
        );
        assert_eq!(source.get("app.enabled"), Some("true"));
    }

    #[test]
    fn test_blank_content_is_empty() {
        let source = JsonPropertySourceLoader.load("test", "  \n").unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        let err = JsonPropertySourceLoader.load("test", "[1, 2]").unwrap_err();
        assert!(err.to_string().contains("document root must be an object"));
    }

    #[test]
    fn test_syntax_error_reports_position_not_content() {
        let err = JsonPropertySourceLoader
            .load("test", "{\"password\": s3cr3t}")
            .unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("line 1"));
        assert!(!msg.contains("s3cr3t"));
    }
}
