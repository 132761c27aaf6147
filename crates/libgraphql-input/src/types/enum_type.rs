use crate::ast;
use crate::loc;
use crate::types::LiteralParser;
use crate::Value;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn new(
        name: impl AsRef<str>,
        values: impl IntoIterator<Item = EnumValue>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::Programmatic,
            description: None,
            name: name.as_ref().to_string(),
            values: values.into_iter()
                .map(|value| (value.name.to_owned(), value))
                .collect(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`EnumValue`]s of this type, in declaration order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

}

#[inherent]
impl LiteralParser for EnumType {
    /// An enum literal naming one of this type's values produces that value's
    /// runtime [`Value`]. Anything else is invalid.
    pub fn parse_literal(&self, value_ast: &ast::Value) -> Option<Value> {
        if let ast::Value::Enum(name) = value_ast {
            self.values.get(name).map(|enum_value| enum_value.value.to_owned())
        } else {
            None
        }
    }
}

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) value: Value,
}
impl EnumValue {
    /// An enum value whose runtime value is [`Value::Enum`] of its own name.
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref().to_string();
        Self {
            def_location: loc::SourceLocation::Programmatic,
            description: None,
            value: Value::Enum(name.to_owned()),
            name,
        }
    }

    /// Use `value` as the runtime value this enum value converts into.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
