//! The per-invocation parameter bag and loose-input coercion.
//!
//! Callers hand every kernel a JSON object of heterogeneous values. All
//! coercion happens here, up front, so the algorithm bodies only ever see
//! strongly-typed values.

use serde_json::Value;
use std::collections::HashMap;

/// Loosely-typed parameter bag supplied per invocation; never persisted.
pub type Params = HashMap<String, Value>;

/// Cipher direction, read from the bag's `mode` key. Anything other than
/// the literal string `"decrypt"` means encrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Reads the direction out of a parameter bag.
    pub fn from_params(params: &Params) -> Self {
        match params.get("mode").and_then(Value::as_str) {
            Some("decrypt") => Mode::Decrypt,
            _ => Mode::Encrypt,
        }
    }

    pub fn is_decrypt(self) -> bool {
        matches!(self, Mode::Decrypt)
    }
}

/// Coerces a loosely-typed JSON value to an integer.
///
/// Accepts integers, integral floats, and trimmed strings that parse as
/// integers. Booleans carry no integral semantic in JSON and coerce to
/// `None`, as does everything else. Total: never panics, never truncates.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            n.as_f64()
                .filter(|f| {
                    f.is_finite()
                        && f.fract() == 0.0
                        && *f >= i64::MIN as f64
                        && *f <= i64::MAX as f64
                })
                .map(|f| f as i64)
        }
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<i64>().ok()
        }
        _ => None,
    }
}

/// Integer field lookup; `None` when the field is absent or not coercible.
pub fn int_field(params: &Params, key: &str) -> Option<i64> {
    params.get(key).and_then(coerce_int)
}

/// String field lookup; absent or non-string fields yield the empty string.
pub fn str_field<'a>(params: &'a Params, key: &str) -> &'a str {
    params.get(key).and_then(Value::as_str).unwrap_or("")
}
