//! Jira REST v2 response shapes

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub issues: Vec<WireIssue>,
}

/// An issue with its fields kept as raw JSON, since the interesting ones are
/// custom fields whose ids come from configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WireIssue {
    pub key: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl WireIssue {
    pub fn field(&self, id: &str) -> Option<&Value> {
        self.fields.get(id).filter(|v| !v.is_null())
    }

    /// Display text of a field, or an empty string when absent.
    pub fn text(&self, id: &str) -> String {
        self.field(id).and_then(display_name).unwrap_or_default()
    }

    pub fn optional_text(&self, id: Option<&str>) -> Option<String> {
        id.and_then(|id| self.field(id)).and_then(display_name).filter(|s| !s.is_empty())
    }

    pub fn names(&self, id: &str) -> Vec<String> {
        self.field(id).map(names).unwrap_or_default()
    }

    pub fn number(&self, id: &str) -> Option<f64> {
        self.field(id).and_then(number)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireComponent {
    pub name: String,
}

/// Human-readable text of a scalar or of the usual Jira object shapes (users,
/// statuses, options).
pub fn display_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(obj) => ["displayName", "name", "value", "key"]
            .iter()
            .find_map(|k| obj.get(*k).and_then(Value::as_str))
            .map(str::to_string),
        Value::Array(_) | Value::Null => None,
    }
}

pub fn names(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(display_name).collect(),
        other => display_name(other).into_iter().collect(),
    }
}

pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
