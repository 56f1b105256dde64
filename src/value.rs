use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An insertion-ordered map of query parameters.
///
/// Key order follows the order keys first appeared. Inserting an existing
/// key again overwrites the value but keeps the original position.
pub type QueryMap = IndexMap<String, Value>;

/// A query parameter value with its lexically inferred type.
///
/// The inference is driven by the raw text form alone:
///
/// - `Bool`: text exactly `true` or `false` (case-sensitive, whole-string)
/// - `Int` / `Float`: text passing the loose numeric test; `Float` when the
///   text contains a literal `.`
/// - `String`: any other text, percent-decoded
/// - `Undefined`: a missing value, or -- by default -- any falsy value (see
///   the crate-level docs on the falsy collapse)
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Undefined,
}

impl Value {
    /// Falsy in the boolean-coercion sense: `false`, zero or NaN numbers,
    /// the empty string, and `Undefined` itself.
    pub(crate) fn is_falsy(&self) -> bool {
        match self {
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Float(f) => *f == 0.0 || f.is_nan(),
            Value::String(s) => s.is_empty(),
            Value::Undefined => true,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns the inner boolean, if this value is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the inner integer, if this value is an `Int`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns this value as a float, if it is numeric. Integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the inner string, if this value is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Undefined => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean, number, string or unit")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
                Ok(Value::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
                match i64::try_from(v) {
                    Ok(i) => Ok(Value::Int(i)),
                    Err(_) => Ok(Value::Float(v as f64)),
                }
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
                Ok(Value::Float(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
                Ok(Value::String(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
                Ok(Value::String(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
                Ok(Value::Undefined)
            }

            fn visit_none<E: de::Error>(self) -> Result<Value, E> {
                Ok(Value::Undefined)
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::Value;

    #[test]
    fn falsy_values() {
        assert!(Value::Bool(false).is_falsy());
        assert!(Value::Int(0).is_falsy());
        assert!(Value::Float(0.0).is_falsy());
        assert!(Value::Float(f64::NAN).is_falsy());
        assert!(Value::String(String::new()).is_falsy());
        assert!(Value::Undefined.is_falsy());

        assert!(!Value::Bool(true).is_falsy());
        assert!(!Value::Int(-1).is_falsy());
        assert!(!Value::Float(0.1).is_falsy());
        assert!(!Value::String("0".to_owned()).is_falsy());
    }

    #[test]
    fn serde_representation() {
        let value = serde_json::to_value(Value::Int(3)).unwrap();
        assert_eq!(value, serde_json::json!(3));

        let value = serde_json::to_value(Value::Undefined).unwrap();
        assert_eq!(value, serde_json::Value::Null);

        let back: Value = serde_json::from_value(serde_json::json!("hey")).unwrap();
        assert_eq!(back, Value::String("hey".to_owned()));

        let back: Value = serde_json::from_value(serde_json::Value::Null).unwrap();
        assert_eq!(back, Value::Undefined);
    }
}
