//! Primitive field values carried by entity records.
//!
//! Backend responses are JSON objects whose fields are strings, numbers,
//! booleans or nulls. Dates travel as ISO strings and stay strings here;
//! interpreting them is up to whoever compares them.

use std::borrow::Cow;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single primitive field value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// Convert a JSON value, returning `None` for arrays and objects.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(Value::Null),
            serde_json::Value::Bool(flag) => Some(Value::Bool(*flag)),
            serde_json::Value::Number(number) => number.as_f64().map(Value::Number),
            serde_json::Value::String(text) => Some(Value::Text(text.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(flag) => serde_json::Value::Bool(*flag),
            Value::Number(number) => match integral(*number) {
                Some(int) => serde_json::Value::from(int),
                None => serde_json::Number::from_f64(*number)
                    .map_or(serde_json::Value::Null, serde_json::Value::Number),
            },
            Value::Text(text) => serde_json::Value::String(text.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Lenient numeric reading: numbers as-is, numeric strings parsed.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            Value::Text(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Text used when matching a free-text search.
    ///
    /// Booleans and nulls are not searchable.
    pub fn search_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Text(text) => Some(Cow::Borrowed(text)),
            Value::Number(number) => Some(Cow::Owned(format_number(*number))),
            Value::Bool(_) | Value::Null => None,
        }
    }

    /// Human-readable rendering for table cells.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(""),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Number(number) => Cow::Owned(format_number(*number)),
            Value::Text(text) => Cow::Borrowed(text),
        }
    }
}

fn integral(number: f64) -> Option<i64> {
    if number.fract() == 0.0 && number.abs() < 9.0e15 {
        Some(number as i64)
    } else {
        None
    }
}

/// Format a number without a trailing `.0` for integral values.
pub fn format_number(number: f64) -> String {
    match integral(number) {
        Some(int) => int.to_string(),
        None => number.to_string(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Value::from_json(&raw).ok_or_else(|| D::Error::custom("expected a primitive value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(Value::from(1999).display_text(), "1999");
        assert_eq!(Value::from(2.5).display_text(), "2.5");
        assert_eq!(Value::from(1999).to_json(), serde_json::json!(1999));
    }

    #[test]
    fn nested_json_is_not_a_value() {
        assert!(Value::from_json(&serde_json::json!({"a": 1})).is_none());
        assert!(Value::from_json(&serde_json::json!([1, 2])).is_none());
        assert_eq!(
            Value::from_json(&serde_json::json!(null)),
            Some(Value::Null)
        );
    }

    #[test]
    fn search_text_skips_flags() {
        assert!(Value::Bool(true).search_text().is_none());
        assert!(Value::Null.search_text().is_none());
        assert_eq!(Value::from(42).search_text().as_deref(), Some("42"));
    }

    #[test]
    fn numeric_strings_read_as_numbers() {
        assert_eq!(Value::from("12.50").to_number(), Some(12.5));
        assert_eq!(Value::from("n/a").to_number(), None);
        assert_eq!(Value::Bool(true).to_number(), None);
    }
}
