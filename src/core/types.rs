//! Type mapping and initial value formatting for generated C code.

use serde_json::Value;
use std::fmt;

/// Type of a generated buffer or accessor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    Boolean,
    Double,
    /// Unrecognized tokens pass through; the generated code assumes the
    /// type exists.
    Named(String),
}

impl TargetType {
    pub fn c_name(&self) -> &str {
        match self {
            Self::Boolean => "Boolean",
            Self::Double => "Double",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

pub const BOOLEAN_FALSE: &str = "(Boolean)0";
pub const BOOLEAN_TRUE: &str = "(Boolean)1";

/// Maps a description type token to its generated type, case-insensitively.
/// Anything unrecognized gets its first character upper-cased.
pub fn map_type(token: &str) -> TargetType {
    match token.to_lowercase().as_str() {
        "boolean" | "bool" => TargetType::Boolean,
        "double" | "float" | "real" => TargetType::Double,
        _ => TargetType::Named(capitalize_first(token)),
    }
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Initializer literal for a provide-side buffer. Never fails: values with
/// no sensible C spelling are stringified as they are.
pub fn format_initial(target: &TargetType, raw: Option<&Value>) -> String {
    match (target, raw.filter(|v| !v.is_null())) {
        (TargetType::Boolean, None) => BOOLEAN_FALSE.to_string(),
        (TargetType::Double, None) => "0.0".to_string(),
        (TargetType::Named(_), None) => "0".to_string(),
        (TargetType::Boolean, Some(value)) => {
            if is_truthy(value) {
                BOOLEAN_TRUE.to_string()
            } else {
                BOOLEAN_FALSE.to_string()
            }
        }
        (_, Some(value)) => raw_text(value),
    }
}

/// `false`, zero, the empty string and empty collections are false; every
/// other value is true. Any non-empty string is true, including `"false"`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
