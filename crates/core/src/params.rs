//! Tolerant helpers for reading typed generator options out of a JSON object.
//!
//! A missing key or a value of the wrong type yields the default; these
//! never fail.

use serde_json::Value;

/// Extracts a `bool` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Extracts a signed integer from `params[name]`, returning `default` if
/// missing or not an integer. Negative values are passed through; callers
/// decide how to correct them.
pub fn param_i64(params: &Value, name: &str, default: i64) -> i64 {
    params.get(name).and_then(Value::as_i64).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_bool_extracts_true_and_false() {
        let params = json!({"animate": true, "timing": false});
        assert!(param_bool(&params, "animate", false));
        assert!(!param_bool(&params, "timing", true));
    }

    #[test]
    fn param_bool_returns_default_when_key_missing() {
        assert!(param_bool(&json!({}), "animate", true));
    }

    #[test]
    fn param_bool_returns_default_for_wrong_type() {
        assert!(!param_bool(&json!({"animate": 1}), "animate", false));
    }

    #[test]
    fn param_i64_extracts_positive_and_negative() {
        let params = json!({"delay_ms": 25, "offset": -3});
        assert_eq!(param_i64(&params, "delay_ms", 0), 25);
        assert_eq!(param_i64(&params, "offset", 0), -3);
    }

    #[test]
    fn param_i64_returns_default_for_float_or_string() {
        assert_eq!(param_i64(&json!({"delay_ms": 2.5}), "delay_ms", 7), 7);
        assert_eq!(param_i64(&json!({"delay_ms": "fast"}), "delay_ms", 7), 7);
    }

    #[test]
    fn helpers_return_default_for_non_object() {
        let params = json!("not an object");
        assert_eq!(param_i64(&params, "delay_ms", 9), 9);
        assert!(param_bool(&params, "animate", true));
    }
}
