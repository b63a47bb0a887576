//! Typed key/value bag carried by every entity.

use crate::error::AttributeError;
use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key read by [`crate::objects::Entity::is_alive`] to override the duration check.
pub const ENERGY: &str = "energy";

/// The closed set of values an attribute may hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Vector(Vec2),
}

impl AttributeValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Int(_) => "int",
            AttributeValue::Float(_) => "float",
            AttributeValue::Bool(_) => "bool",
            AttributeValue::Text(_) => "text",
            AttributeValue::Vector(_) => "vector",
        }
    }

    /// Numeric view of `Int` and `Float` values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Int(v) => Some(*v as f64),
            AttributeValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v.into())
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<Vec2> for AttributeValue {
    fn from(v: Vec2) -> Self {
        AttributeValue::Vector(v)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    values: BTreeMap<String, AttributeValue>,
}

macro_rules! typed_getter {
    ($name:ident, $variant:ident, $ty:ty, $label:literal) => {
        pub fn $name(&self, key: &str) -> Result<$ty, AttributeError> {
            match self.require(key)? {
                AttributeValue::$variant(v) => Ok(v.clone()),
                other => Err(AttributeError::TypeMismatch {
                    key: key.to_string(),
                    expected: $label,
                    found: other.type_name(),
                }),
            }
        }
    };
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Option<AttributeValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn require(&self, key: &str) -> Result<&AttributeValue, AttributeError> {
        self.values
            .get(key)
            .ok_or_else(|| AttributeError::Missing(key.to_string()))
    }

    typed_getter!(get_int, Int, i64, "int");
    typed_getter!(get_float, Float, f64, "float");
    typed_getter!(get_bool, Bool, bool, "bool");
    typed_getter!(get_text, Text, String, "text");
    typed_getter!(get_vector, Vector, Vec2, "vector");

    /// Reads `Int` or `Float` values as `f64`.
    pub fn get_number(&self, key: &str) -> Result<f64, AttributeError> {
        let value = self.require(key)?;
        value.as_f64().ok_or_else(|| AttributeError::TypeMismatch {
            key: key.to_string(),
            expected: "number",
            found: value.type_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_typed() {
        let mut attrs = Attributes::new();
        attrs.set("points", 150);
        attrs.set("hurt", true);
        attrs.set("label", "player");
        attrs.set("spawn", Vec2::new(1.0, 2.0));
        assert_eq!(attrs.get_int("points"), Ok(150));
        assert_eq!(attrs.get_bool("hurt"), Ok(true));
        assert_eq!(attrs.get_text("label"), Ok("player".to_string()));
        assert_eq!(attrs.get_vector("spawn"), Ok(Vec2::new(1.0, 2.0)));
        assert_eq!(attrs.len(), 4);
    }

    #[test]
    fn test_wrong_type_is_reported_at_access() {
        let mut attrs = Attributes::new();
        attrs.set("energy", 12.5);
        let err = attrs.get_int("energy").unwrap_err();
        assert_eq!(
            err,
            AttributeError::TypeMismatch {
                key: "energy".to_string(),
                expected: "int",
                found: "float",
            }
        );
    }

    #[test]
    fn test_missing_key() {
        let attrs = Attributes::new();
        assert_eq!(attrs.get_float("nope"), Err(AttributeError::Missing("nope".to_string())));
    }

    #[test]
    fn test_get_number_accepts_int_and_float() {
        let mut attrs = Attributes::new();
        attrs.set("a", 3);
        attrs.set("b", 0.5);
        attrs.set("c", "x");
        assert_eq!(attrs.get_number("a"), Ok(3.0));
        assert_eq!(attrs.get_number("b"), Ok(0.5));
        assert!(attrs.get_number("c").is_err());
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.set("k", 1), None);
        assert_eq!(attrs.set("k", 2), Some(AttributeValue::Int(1)));
        assert_eq!(attrs.remove("k"), Some(AttributeValue::Int(2)));
        assert!(!attrs.contains("k"));
    }
}
