//! Normalization of free-text model replies into JSON objects.
//!
//! Models are asked for bare JSON but regularly wrap it in markdown fences or
//! surround it with a sentence of prose. Everything here is pure so the
//! cleanup can be tested without a provider.

use serde_json::{Map, Value};

use crate::domain::common::entities::app_errors::CoreError;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Removes a leading ```` ```json ```` or ```` ``` ```` marker and a trailing
/// ```` ``` ```` marker, then trims.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(JSON_FENCE) {
        text = rest;
    }
    if let Some(rest) = text.strip_prefix(FENCE) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

/// Returns the span of `raw` most likely to hold the JSON object: fences are
/// stripped, and stray prose is cut away by slicing from the first `{` to the
/// last `}`.
pub fn extract_json_text(raw: &str) -> &str {
    let text = strip_code_fences(raw);

    if text.starts_with('{') && text.ends_with('}') {
        return text;
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Parses a model reply into a JSON object.
pub fn parse_json_object(raw: &str) -> Result<Map<String, Value>, CoreError> {
    let text = extract_json_text(raw);

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => Err(CoreError::MalformedReply(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(CoreError::MalformedReply(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Non-blank string under `key`, trimmed. Anything else reads as absent.
pub fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// String list under `key`, or `None` when the key is missing or not list-like.
/// A lone string is accepted as a one-element list; non-string items are skipped.
pub fn optional_string_list_field(object: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    match object.get(key) {
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        Some(Value::String(s)) if !s.trim().is_empty() => Some(vec![s.trim().to_string()]),
        _ => None,
    }
}

/// Like [`optional_string_list_field`], defaulting to an empty list.
pub fn string_list_field(object: &Map<String, Value>, key: &str) -> Vec<String> {
    optional_string_list_field(object, key).unwrap_or_default()
}

/// Score under `key` clamped to `[0, 1]`. Numeric strings are accepted.
pub fn score_field(object: &Map<String, Value>, key: &str) -> Option<f64> {
    let score = match object.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !score.is_finite() {
        return None;
    }

    Some(score.clamp(0.0, 1.0))
}
