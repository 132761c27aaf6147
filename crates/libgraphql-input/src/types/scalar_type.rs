use crate::ast;
use crate::loc;
use crate::types::BuiltinScalar;
use crate::types::LiteralParser;
use crate::types::UntypedLiteralParser;
use crate::Value;
use std::sync::Arc;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug)]
pub struct ScalarType {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) parser: Arc<dyn LiteralParser>,
}
impl ScalarType {
    /// Define a custom scalar whose literals are parsed by `parser`.
    pub fn new(
        name: impl AsRef<str>,
        parser: impl LiteralParser + 'static,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::Programmatic,
            description: None,
            name: name.as_ref().to_string(),
            parser: Arc::new(parser),
        }
    }

    pub(crate) fn builtin(scalar: BuiltinScalar) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            name: scalar.name().to_string(),
            parser: Arc::new(scalar),
        }
    }

    pub(crate) fn from_schema_def(
        def_location: loc::SourceLocation,
        description: Option<String>,
        name: &str,
    ) -> Self {
        Self {
            def_location,
            description,
            name: name.to_string(),
            parser: Arc::new(UntypedLiteralParser),
        }
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ScalarType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The description of this [`ScalarType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`ScalarType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parse_literal(&self, value_ast: &ast::Value) -> Option<Value> {
        self.parser.parse_literal(value_ast)
    }

    pub(crate) fn set_parser(&mut self, parser: Arc<dyn LiteralParser>) {
        self.parser = parser;
    }
}
