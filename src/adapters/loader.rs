use crate::utils::error::{Result, RteGenError};
use serde_json::Value;
use std::path::Path;

/// Formats a component description can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Picks the format from the file extension, falling back to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }
}

/// Parses a document into the generic tree the extractor walks.
pub fn parse_document(path: &Path, content: &str) -> Result<Value> {
    let format = DocumentFormat::from_path(path);
    tracing::debug!("Parsing {} as {}", path.display(), format.name());

    let parsed = match format {
        DocumentFormat::Yaml => parse_yaml(content),
        DocumentFormat::Json => serde_json::from_str::<Value>(content).map_err(|e| e.to_string()),
        DocumentFormat::Toml => toml::from_str::<Value>(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| RteGenError::ParseError {
        path: path.to_path_buf(),
        format: format.name().to_string(),
        message,
    })
}

/// YAML goes through its own tree first: merge keys are applied, non-finite
/// floats are kept as their text (`inf`, `-inf`, `nan`) and scalar mapping
/// keys are stringified.
fn parse_yaml(content: &str) -> std::result::Result<Value, String> {
    let mut doc = serde_yaml::from_str::<serde_yaml::Value>(content).map_err(|e| e.to_string())?;
    doc.apply_merge().map_err(|e| e.to_string())?;
    yaml_to_tree(doc)
}

fn yaml_to_tree(value: serde_yaml::Value) -> std::result::Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_tree)
                .collect::<std::result::Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = serde_json::Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(yaml_key(key)?, yaml_to_tree(value)?);
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_tree(tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::from(i);
    }
    if let Some(u) = n.as_u64() {
        return Value::from(u);
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => Value::from(f),
        Some(f) if f.is_nan() => Value::String("nan".to_string()),
        Some(f) if f.is_sign_negative() => Value::String("-inf".to_string()),
        Some(_) => Value::String("inf".to_string()),
        None => Value::String(n.to_string()),
    }
}

fn yaml_key(key: serde_yaml::Value) -> std::result::Result<String, String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Number(n) => match yaml_number(&n) {
            Value::String(s) => Ok(s),
            other => Ok(other.to_string()),
        },
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => {
            Err("mapping keys must be scalars".to_string())
        }
    }
}
