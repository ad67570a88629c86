//! Field accessors over decoded JSON objects.
//!
//! Two families: `lenient_*` never fail and fall back to a placeholder,
//! `required_*` return a [`ParseError`] naming the missing or mistyped key.

use serde_json::{Map, Value};

use crate::error::ParseError;

pub type Object = Map<String, Value>;

/// Text used for a leaf string that is absent or `null`.
pub const PLACEHOLDER: &str = "None";

/// Read a string field, stringifying other scalars and substituting
/// [`PLACEHOLDER`] when the key is absent or `null`.
pub fn lenient_str(obj: &Object, key: &str) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Read a flag by truthiness. Absent, `null`, `false`, zero, empty strings
/// and empty containers are all false.
pub fn lenient_bool(obj: &Object, key: &str) -> bool {
    match obj.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

pub fn as_object<'a>(value: &'a Value, field: &str) -> Result<&'a Object, ParseError> {
    value.as_object().ok_or_else(|| ParseError::InvalidType {
        field: field.to_string(),
        expected: "an object",
    })
}

pub fn required<'a>(obj: &'a Object, key: &str) -> Result<&'a Value, ParseError> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(ParseError::MissingField(key.to_string())),
        Some(value) => Ok(value),
    }
}

pub fn required_object<'a>(obj: &'a Object, key: &str) -> Result<&'a Object, ParseError> {
    as_object(required(obj, key)?, key)
}

pub fn required_array<'a>(obj: &'a Object, key: &str) -> Result<&'a [Value], ParseError> {
    required(obj, key)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ParseError::InvalidType {
            field: key.to_string(),
            expected: "an array",
        })
}

/// Read an integer, coercing floats (truncated), booleans and numeric strings.
pub fn required_int(obj: &Object, key: &str) -> Result<i64, ParseError> {
    let invalid = || ParseError::InvalidType {
        field: key.to_string(),
        expected: "an integer",
    };

    match required(obj, key)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .ok_or_else(invalid),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => s.trim().parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
