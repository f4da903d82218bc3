//! Dotted-path lookups into an untyped provider payload.
//!
//! Every accessor returns `None` when any segment is missing, when an
//! intermediate node is not an object, or when the final value is `null`.
//! Callers pick their own default with `unwrap_or`.

use serde_json::{Map, Value};

/// Walks `path` (`"a.b.c"`) through nested objects.
pub fn lookup<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = payload;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Non-empty string at `path`.
pub fn str_at<'a>(payload: &'a Value, path: &str) -> Option<&'a str> {
    lookup(payload, path)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Object at `path`.
pub fn object_at<'a>(payload: &'a Value, path: &str) -> Option<&'a Map<String, Value>> {
    lookup(payload, path).and_then(Value::as_object)
}

/// Array at `path`.
pub fn array_at<'a>(payload: &'a Value, path: &str) -> Option<&'a Vec<Value>> {
    lookup(payload, path).and_then(Value::as_array)
}

/// Float at `path`, accepting numbers and numeric strings.
pub fn f64_at(payload: &Value, path: &str) -> Option<f64> {
    lookup(payload, path).and_then(coerce_f64)
}

/// Integer at `path`, accepting numbers and numeric strings; fractions truncate.
pub fn i64_at(payload: &Value, path: &str) -> Option<i64> {
    lookup(payload, path).and_then(coerce_i64)
}

/// Truthiness of the value at `path`.
pub fn bool_at(payload: &Value, path: &str) -> Option<bool> {
    lookup(payload, path).map(truthy)
}

/// A JSON number as `f64`. Strings, booleans and everything else are rejected.
pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

/// A JSON number, or a string holding one.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        other => as_number(other),
    }
}

/// Integer form of [`coerce_f64`], truncating toward zero.
#[allow(clippy::cast_possible_truncation)]
pub fn coerce_i64(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    if let Value::String(s) = value {
        if let Ok(i) = s.trim().parse::<i64>() {
            return Some(i);
        }
    }
    coerce_f64(value).map(|v| v.trunc() as i64)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes"
        ),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
