//! Output formatters for CLI commands.
//!
//! Provides multiple output formats: properties (default), JSON, and YAML.
//!
//! Invariants:
//! - JSON and YAML output is a list with one entry per location or resource.
//! - Properties output re-escapes keys and values so it can be read back.

use anyhow::Result;
use envdata_config::{EnvConfigDataResource, ImportOutcome, PropertySource};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Properties,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "properties" => Ok(OutputFormat::Properties),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: properties, json, yaml",
                s
            ),
        }
    }
}

/// One location after resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedOutput {
    pub location: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
}

impl ResolvedOutput {
    pub fn resolved(resource: &EnvConfigDataResource) -> Self {
        Self {
            location: resource.location().to_string(),
            status: "resolved",
            variable: Some(resource.variable_name().to_string()),
            loader: Some(resource.loader().name().to_string()),
        }
    }

    pub fn skipped(location: impl ToString) -> Self {
        Self {
            location: location.to_string(),
            status: "skipped",
            variable: None,
            loader: None,
        }
    }
}

/// One location after loading.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedOutput {
    pub location: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertySource>,
}

impl LoadedOutput {
    /// One row per property source, or a single row for a skipped location.
    pub fn from_outcome(outcome: ImportOutcome) -> Vec<Self> {
        match outcome {
            ImportOutcome::Loaded { resource, data } => data
                .into_property_sources()
                .into_iter()
                .map(|source| LoadedOutput {
                    location: resource.location().to_string(),
                    status: "loaded",
                    source: Some(source.name().to_string()),
                    properties: Some(source),
                })
                .collect(),
            ImportOutcome::Skipped { location } => vec![LoadedOutput {
                location: location.to_string(),
                status: "skipped",
                source: None,
                properties: None,
            }],
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format resolution results.
    fn format_resolved(&self, rows: &[ResolvedOutput]) -> Result<String>;

    /// Format loaded property sources.
    fn format_loaded(&self, rows: &[LoadedOutput]) -> Result<String>;
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_resolved(&self, rows: &[ResolvedOutput]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(rows)?))
    }

    fn format_loaded(&self, rows: &[LoadedOutput]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(rows)?))
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_resolved(&self, rows: &[ResolvedOutput]) -> Result<String> {
        Ok(serde_yaml::to_string(rows)?)
    }

    fn format_loaded(&self, rows: &[LoadedOutput]) -> Result<String> {
        Ok(serde_yaml::to_string(rows)?)
    }
}

pub struct PropertiesFormatter;

impl Formatter for PropertiesFormatter {
    fn format_resolved(&self, rows: &[ResolvedOutput]) -> Result<String> {
        let mut output = String::new();
        for row in rows {
            match (&row.variable, &row.loader) {
                (Some(variable), Some(loader)) => output.push_str(&format!(
                    "{} -> env variable [{}] ({})\n",
                    row.location, variable, loader
                )),
                _ => output.push_str(&format!("{} -> {}\n", row.location, row.status)),
            }
        }
        Ok(output)
    }

    fn format_loaded(&self, rows: &[LoadedOutput]) -> Result<String> {
        let mut output = String::new();
        for row in rows {
            match (&row.source, &row.properties) {
                (Some(source), Some(properties)) => {
                    output.push_str(&format!("# {}\n", source));
                    for (key, value) in properties.iter() {
                        output.push_str(&escape(key, true));
                        output.push('=');
                        output.push_str(&escape(value, false));
                        output.push('\n');
                    }
                }
                _ => output.push_str(&format!("# {} ({})\n", row.location, row.status)),
            }
        }
        Ok(output)
    }
}

/// Escape text so the properties loader reads it back unchanged.
fn escape(text: &str, is_key: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\x0c' => escaped.push_str("\\f"),
            '=' | ':' | ' ' if is_key => {
                escaped.push('\\');
                escaped.push(c);
            }
            '#' | '!' if is_key && i == 0 => {
                escaped.push('\\');
                escaped.push(c);
            }
            ' ' if i == 0 => escaped.push_str("\\ "),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Properties => Box::new(PropertiesFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envdata_config::property::{PropertiesPropertySourceLoader, PropertySourceLoader};

    fn loaded_row() -> LoadedOutput {
        let mut properties = PropertySource::new("env variable [APP]");
        properties.insert("server.port", "8080");
        properties.insert("greeting", "hello world");
        LoadedOutput {
            location: "env:APP".to_string(),
            status: "loaded",
            source: Some("env variable [APP]".to_string()),
            properties: Some(properties),
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("yml").unwrap(), OutputFormat::Yaml);
        assert_eq!(
            OutputFormat::from_str("properties").unwrap(),
            OutputFormat::Properties
        );
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_properties_loaded_output() {
        let output = PropertiesFormatter.format_loaded(&[loaded_row()]).unwrap();
        assert_eq!(
            output,
            "# env variable [APP]\nserver.port=8080\ngreeting=hello world\n"
        );
    }

    #[test]
    fn test_properties_skipped_output() {
        let row = LoadedOutput {
            location: "optional:env:MISSING".to_string(),
            status: "skipped",
            source: None,
            properties: None,
        };
        let output = PropertiesFormatter.format_loaded(&[row]).unwrap();
        assert_eq!(output, "# optional:env:MISSING (skipped)\n");
    }

    #[test]
    fn test_properties_output_reads_back() {
        let mut properties = PropertySource::new("test");
        properties.insert("odd key=1", " leading\ttab\\slash\nline");
        properties.insert("#hash", "x");
        let row = LoadedOutput {
            location: "env:APP".to_string(),
            status: "loaded",
            source: Some("test".to_string()),
            properties: Some(properties.clone()),
        };

        let output = PropertiesFormatter.format_loaded(&[row]).unwrap();
        let reread = PropertiesPropertySourceLoader.load("test", &output).unwrap();
        assert_eq!(reread, properties);
    }

    #[test]
    fn test_json_loaded_output() {
        let output = JsonFormatter.format_loaded(&[loaded_row()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["status"], "loaded");
        assert_eq!(value[0]["properties"]["server.port"], "8080");
    }

    #[test]
    fn test_resolved_outputs() {
        let rows = vec![ResolvedOutput::skipped("optional:env:MISSING")];
        let output = PropertiesFormatter.format_resolved(&rows).unwrap();
        assert_eq!(output, "optional:env:MISSING -> skipped\n");

        let yaml = YamlFormatter.format_resolved(&rows).unwrap();
        assert!(yaml.contains("status: skipped"));
        assert!(!yaml.contains("variable"));
    }
}
