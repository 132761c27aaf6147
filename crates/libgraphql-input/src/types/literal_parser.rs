use crate::ast;
use crate::Value;

/// The literal-parsing capability of a leaf (scalar or enum) type.
///
/// Returning `None` marks the literal as invalid for the type. During
/// conversion an invalid literal becomes [`Value::Null`], which is distinct
/// from "no value".
pub trait LiteralParser: core::fmt::Debug + Send + Sync {
    fn parse_literal(&self, value_ast: &ast::Value) -> Option<Value>;
}

/// The scalar types every GraphQL schema defines.
///
/// https://spec.graphql.org/October2021/#sec-Scalars.Built-in-Scalars
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinScalar {
    Boolean,
    Float,
    ID,
    Int,
    String,
}
impl BuiltinScalar {
    pub const ALL: [BuiltinScalar; 5] = [
        Self::Boolean,
        Self::Float,
        Self::ID,
        Self::Int,
        Self::String,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }
}
impl LiteralParser for BuiltinScalar {
    fn parse_literal(&self, value_ast: &ast::Value) -> Option<Value> {
        match (self, value_ast) {
            // Int is a signed 32-bit integer.
            //
            // https://spec.graphql.org/October2021/#sec-Int.Input-Coercion
            (Self::Int, ast::Value::Int(num)) => {
                let int = num.as_i64()?;
                i32::try_from(int).ok().map(Value::from)
            },

            (Self::Float, ast::Value::Int(num)) =>
                num.as_i64().map(|int| Value::Float(int as f64)),
            (Self::Float, ast::Value::Float(float)) =>
                Some(Value::Float(*float)),

            (Self::String, ast::Value::String(str)) =>
                Some(Value::String(str.to_owned())),

            (Self::Boolean, ast::Value::Boolean(bool)) =>
                Some(Value::Bool(*bool)),

            (Self::ID, ast::Value::String(str)) =>
                Some(Value::String(str.to_owned())),
            (Self::ID, ast::Value::Int(num)) =>
                num.as_i64().map(|int| Value::String(int.to_string())),

            _ => None,
        }
    }
}

/// Parses any constant literal into its structurally-equivalent [`Value`].
///
/// Used for custom scalars that have no parser registered. A variable
/// reference anywhere inside the literal makes the whole literal invalid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UntypedLiteralParser;
impl LiteralParser for UntypedLiteralParser {
    fn parse_literal(&self, value_ast: &ast::Value) -> Option<Value> {
        Some(match value_ast {
            ast::Value::Boolean(bool) => Value::Bool(*bool),
            ast::Value::Enum(name) => Value::Enum(name.to_owned()),
            ast::Value::Float(float) => Value::Float(*float),
            ast::Value::Int(num) => Value::Int(num.as_i64()?),
            ast::Value::List(items) => Value::List(
                items.iter()
                    .map(|item| self.parse_literal(item))
                    .collect::<Option<Vec<_>>>()?,
            ),
            ast::Value::Null => Value::Null,
            ast::Value::Object(fields) => Value::Object(
                fields.iter()
                    .map(|(name, value)| {
                        self.parse_literal(value).map(|value| (name.to_owned(), value))
                    })
                    .collect::<Option<_>>()?,
            ),
            ast::Value::String(str) => Value::String(str.to_owned()),
            ast::Value::Variable(_) => return None,
        })
    }
}
