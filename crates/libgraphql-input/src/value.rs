use indexmap::IndexMap;
use std::collections::HashMap;

/// Variable bindings supplied by the caller, keyed by variable name (without
/// the leading `$`). Bound values are used verbatim.
pub type Variables = HashMap<String, Value>;

/// A runtime value materialized from a GraphQL input literal.
///
/// Note that "no value" is not a [`Value`]: conversions that cannot determine
/// a value return `None` instead, which is distinct from [`Value::Null`].
///
/// Serializes as plain JSON-shaped data: enum values render as strings, and
/// non-finite floats render as `null` with `serde_json`. Deserialization tries
/// variants in declaration order, so integral numbers become [`Value::Int`]
/// and strings always become [`Value::String`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
    Enum(String),
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(bool) = self {
            Some(*bool)
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(int) = self {
            Some(*int)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(str) | Self::Enum(str) => Some(str.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}
