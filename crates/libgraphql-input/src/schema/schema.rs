use crate::ast;
use crate::types::InputType;
use crate::types::TypeAnnotation;
use crate::Value;
use crate::Variables;
use std::collections::HashMap;

/// The set of [`InputType`]s literals can be converted into, keyed by name.
///
/// A [`Schema`] is immutable once built and can be shared freely between
/// threads.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) types: HashMap<String, InputType>,
}
impl Schema {
    pub fn contains_type(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// The types defined by the schema's author (i.e. every type except the
    /// built-in scalars).
    pub fn defined_types(&self) -> impl Iterator<Item = &InputType> {
        self.types.values().filter(|type_| !type_.is_builtin())
    }

    pub fn input_type(&self, type_name: &str) -> Option<&InputType> {
        self.types.get(type_name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Shorthand for [`value_from_ast`](crate::value_from_ast) against this
    /// schema.
    pub fn value_from_ast(
        &self,
        value_ast: Option<&ast::Value>,
        type_annot: &TypeAnnotation,
        variables: Option<&Variables>,
    ) -> Option<Value> {
        crate::value_from_ast(value_ast, type_annot, self, variables)
    }
}
