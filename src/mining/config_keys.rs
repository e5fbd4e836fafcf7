//! Config surface: flatten nested key-value documents and classify their keys

use crate::models::ConfigMetadata;
use anyhow::Result;
use serde_yaml::Value;
use std::collections::BTreeSet;
use std::path::Path;

/// Structured document syntax, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Some(ConfigFormat::Yaml),
            Some("json") => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

/// Parse a document into a YAML value tree. JSON goes through `serde_json`
/// so its own syntax errors are reported.
pub fn parse_document(text: &str, format: ConfigFormat) -> Result<Value> {
    let value = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(text)?,
        ConfigFormat::Json => {
            let json: serde_json::Value = serde_json::from_str(text)?;
            serde_yaml::to_value(json)?
        }
    };
    Ok(value)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        // Collections never reach here; flatten recurses into them
        other => serde_yaml::to_string(other).unwrap_or_default().trim().to_string(),
    }
}

fn join_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn flatten_into(value: &Value, key: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Mapping(map) => {
            for (k, v) in map {
                flatten_into(v, &join_key(key, &scalar_to_string(k)), out);
            }
        }
        Value::Sequence(items) => {
            for item in items {
                match item {
                    Value::Mapping(_) | Value::Sequence(_) => {
                        flatten_into(item, &join_key(key, "list_item"), out);
                    }
                    scalar => out.push((key.to_string(), scalar_to_string(scalar))),
                }
            }
        }
        Value::Tagged(tagged) => flatten_into(&tagged.value, key, out),
        scalar => out.push((key.to_string(), scalar_to_string(scalar))),
    }
}

/// Flatten a mapping to `(dotted.key, value)` pairs. Nested collections
/// inside lists appear under a synthetic `list_item` key. Anything other
/// than a mapping at the top level yields nothing.
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    if let Value::Mapping(_) = value {
        flatten_into(value, "", &mut out);
    }
    out
}

/// Accumulates classified keys across every config file of one provider.
#[derive(Debug, Default)]
pub struct ConfigCollector {
    env_vars: BTreeSet<String>,
    models: BTreeSet<String>,
    tools: BTreeSet<String>,
}

impl ConfigCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify flattened entries: credential-like keys are kept as keys,
    /// model and tool keys contribute their values.
    pub fn add_entries(&mut self, entries: &[(String, String)]) {
        for (key, value) in entries {
            let key_lower = key.to_lowercase();
            if key_lower.contains("api_key") || key_lower.contains("token") {
                self.env_vars.insert(key.clone());
            }
            if key_lower.contains("model") {
                self.models.insert(value.clone());
            }
            if key_lower.contains("tool") {
                self.tools.insert(value.clone());
            }
        }
    }

    /// Parse and classify one document.
    pub fn add_document(&mut self, text: &str, format: ConfigFormat) -> Result<()> {
        let value = parse_document(text, format)?;
        self.add_entries(&flatten(&value));
        Ok(())
    }

    /// Sorted, de-duplicated lists.
    pub fn finish(self) -> ConfigMetadata {
        ConfigMetadata {
            env_vars: self.env_vars.into_iter().collect(),
            models: self.models.into_iter().collect(),
            tools: self.tools.into_iter().collect(),
        }
    }
}
