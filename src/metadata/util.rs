//! Typed lookups over a metadata bag.
//!
//! Missing or unparseable values yield the type's default rather than an
//! error; transport code decides whether a zero value is acceptable.

use std::time::Duration;

use serde_json::Value;

use super::Metadata;

pub fn get_bool(md: &dyn Metadata, key: &str) -> bool {
    match md.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        ),
        _ => false,
    }
}

pub fn get_int(md: &dyn Metadata, key: &str) -> i64 {
    match md.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|v| v as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Bool(b)) => *b as i64,
        _ => 0,
    }
}

pub fn get_float(md: &dyn Metadata, key: &str) -> f64 {
    match md.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub fn get_string(md: &dyn Metadata, key: &str) -> String {
    match md.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Reads a list of strings; a single string value is treated as a one-element list.
pub fn get_strings(md: &dyn Metadata, key: &str) -> Vec<String> {
    match md.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Reads a duration. Plain numbers are seconds; strings may carry a
/// `ns`, `us`, `ms`, `s`, `m` or `h` suffix.
pub fn get_duration(md: &dyn Metadata, key: &str) -> Duration {
    match md.get(key) {
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|v| *v > 0.0)
            .and_then(|v| Duration::try_from_secs_f64(v).ok())
            .unwrap_or_default(),
        Some(Value::String(s)) => parse_duration(s).unwrap_or_default(),
        _ => Duration::ZERO,
    }
}

fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    let split = s.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
    let (value, unit) = s.split_at(split);
    if value.is_empty() {
        return None;
    }
    let value: f64 = value.parse().ok()?;
    let secs = match unit {
        "ns" => value / 1e9,
        "us" | "µs" => value / 1e6,
        "ms" => value / 1e3,
        "s" => value,
        "m" => value * 60.0,
        "h" => value * 3600.0,
        _ => return None,
    };
    Duration::try_from_secs_f64(secs).ok()
}
