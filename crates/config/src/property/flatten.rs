//! Flattening of structured documents into dotted property names.
//!
//! Nested mappings join keys with `.`, sequences append `[i]`, scalars are
//! rendered as strings and `null` as the empty string. An empty mapping or
//! sequence below the root still produces an entry so the key is visible.

use super::PropertySource;

/// Join a parent path and a child key.
fn child_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

pub(super) fn flatten_json(
    value: &serde_json::Value,
    prefix: &str,
    source: &mut PropertySource,
) {
    use serde_json::Value;

    match value {
        Value::Object(map) if map.is_empty() => {
            if !prefix.is_empty() {
                source.insert(prefix, "");
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                flatten_json(child, &child_path(prefix, key), source);
            }
        }
        Value::Array(items) if items.is_empty() => source.insert(prefix, ""),
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_json(child, &format!("{}[{}]", prefix, index), source);
            }
        }
        Value::Null => source.insert(prefix, ""),
        Value::String(s) => source.insert(prefix, s.as_str()),
        Value::Bool(b) => source.insert(prefix, b.to_string()),
        Value::Number(n) => source.insert(prefix, n.to_string()),
    }
}

/// Render a YAML mapping key. Only scalar keys are supported.
fn yaml_key(key: &serde_yaml::Value) -> Result<String, String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Tagged(tagged) => yaml_key(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err("mapping keys must be scalars".to_string())
        }
    }
}

pub(super) fn flatten_yaml(
    value: &serde_yaml::Value,
    prefix: &str,
    source: &mut PropertySource,
) -> Result<(), String> {
    use serde_yaml::Value;

    match value {
        Value::Mapping(map) if map.is_empty() => {
            if !prefix.is_empty() {
                source.insert(prefix, "");
            }
        }
        Value::Mapping(map) => {
            for (key, child) in map {
                flatten_yaml(child, &child_path(prefix, &yaml_key(key)?), source)?;
            }
        }
        Value::Sequence(items) if items.is_empty() => source.insert(prefix, ""),
        Value::Sequence(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_yaml(child, &format!("{}[{}]", prefix, index), source)?;
            }
        }
        Value::Tagged(tagged) => flatten_yaml(&tagged.value, prefix, source)?,
        Value::Null => source.insert(prefix, ""),
        Value::String(s) => source.insert(prefix, s.as_str()),
        Value::Bool(b) => source.insert(prefix, b.to_string()),
        Value::Number(n) => source.insert(prefix, n.to_string()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_json_nested() {
        let value: serde_json::Value = serde_json::from_str(
            r#"{"server":{"port":8080,"hosts":["a","b"],"tls":null,"extra":{}}}"#,
        )
        .unwrap();
        let mut source = PropertySource::new("test");
        flatten_json(&value, "", &mut source);

        assert_eq!(source.get("server.port"), Some("8080"));
        assert_eq!(source.get("server.hosts[0]"), Some("a"));
        assert_eq!(source.get("server.hosts[1]"), Some("b"));
        assert_eq!(source.get("server.tls"), Some(""));
        assert_eq!(source.get("server.extra"), Some(""));
    }

    #[test]
    fn test_flatten_json_empty_root() {
        let value = serde_json::json!({});
        let mut source = PropertySource::new("test");
        flatten_json(&value, "", &mut source);
        assert!(source.is_empty());
    }

    #[test]
    fn test_flatten_yaml_scalar_keys() {
        let value: serde_yaml::Value = serde_yaml::from_str("ports:\n  80: http\n  true: yes\n").unwrap();
        let mut source = PropertySource::new("test");
        flatten_yaml(&value, "", &mut source).unwrap();

        assert_eq!(source.get("ports.80"), Some("http"));
        assert_eq!(source.get("ports.true"), Some("yes"));
    }

    #[test]
    fn test_flatten_yaml_rejects_complex_keys() {
        let value: serde_yaml::Value = serde_yaml::from_str("? [a, b]\n: value\n").unwrap();
        let mut source = PropertySource::new("test");
        assert!(flatten_yaml(&value, "", &mut source).is_err());
    }
}
