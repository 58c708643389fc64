//! Serde utilities for tolerant decoding of backend payloads.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a vote or participant count from any JSON value.
///
/// Accepts integers, floats (truncated), and numeric strings. Anything else,
/// including negatives and `null`, counts as zero.
#[must_use]
pub fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or_else(|| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            n.as_f64()
                .filter(|f| f.is_finite() && *f > 0.0)
                .map_or(0, |f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

/// Reads an identifier that the backend may send as a string or a number.
#[must_use]
pub fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Module to deserialize counters that might be numbers, strings or null.
pub mod lenient_count {
    use super::{Deserialize, Deserializer, Value, count_from_value};

    /// Deserializes a count, falling back to zero on unexpected shapes.
    ///
    /// # Errors
    ///
    /// Returns an error only if the input is not valid JSON.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(count_from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(3), 3 ; "integer")]
    #[test_case(json!("12"), 12 ; "numeric_string")]
    #[test_case(json!(4.9), 4 ; "float_truncates")]
    #[test_case(json!(-2), 0 ; "negative")]
    #[test_case(json!(null), 0 ; "null")]
    #[test_case(json!("many"), 0 ; "garbage_string")]
    #[test_case(json!({"a": 1}), 0 ; "object")]
    fn test_count_from_value(input: Value, expected: u64) {
        assert_eq!(count_from_value(&input), expected);
    }

    #[test]
    fn test_id_from_value() {
        assert_eq!(id_from_value(&json!("7")), Some("7".to_string()));
        assert_eq!(id_from_value(&json!(7)), Some("7".to_string()));
        assert_eq!(id_from_value(&json!("")), None);
        assert_eq!(id_from_value(&json!(null)), None);
    }

    #[derive(Deserialize)]
    struct Counter {
        #[serde(default, deserialize_with = "lenient_count::deserialize")]
        votes: u64,
    }

    #[test]
    fn test_lenient_count_field() {
        let parsed: Counter = serde_json::from_str(r#"{"votes": "5"}"#).unwrap();
        assert_eq!(parsed.votes, 5);

        let parsed: Counter = serde_json::from_str(r#"{"votes": null}"#).unwrap();
        assert_eq!(parsed.votes, 0);

        let parsed: Counter = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.votes, 0);
    }
}
