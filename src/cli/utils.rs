//! Shared CLI utilities.

use serde_json::Value;

/// Render a list as `[a b c]`.
pub fn format_list(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}

/// Render a fixture value for display: strings bare, everything else as
/// compact JSON, and a missing value as `<nil>`.
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        None => "<nil>".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
