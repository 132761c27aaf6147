use thiserror::Error;

pub mod query {
    pub use graphql_parser::query::Number;
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
}

pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;

    pub fn parse(
        schema_src: &str,
    ) -> Result<Document, ParseError> {
        Ok(graphql_parser::schema::parse_schema::<String>(schema_src)?.into_static())
    }
}

/// The AST node for a GraphQL input value literal (e.g. `{a: [1, $two]}`).
pub type Value = query::Value;

type Result<T> = std::result::Result<T, AstParseError>;

#[derive(Debug, Error, PartialEq)]
pub enum AstParseError {
    #[error("Error parsing GraphQL source: {0}")]
    ParseError(String),

    #[error("Expected exactly one {expected}, but found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: String,
    },
}

/// Parse a single, standalone GraphQL value literal such as `[1, 2, 3]`,
/// `{name: "x", tags: [A, B]}` or `$someVar`.
pub fn parse_value(value_src: &str) -> Result<Value> {
    let doc_src = format!("{{ __value(literal: {value_src}) }}");
    let doc = graphql_parser::query::parse_query::<String>(doc_src.as_str())
        .map_err(|err| AstParseError::ParseError(err.to_string()))?;

    let Some(graphql_parser::query::Definition::Operation(
        graphql_parser::query::OperationDefinition::SelectionSet(selection_set),
    )) = doc.definitions.into_iter().next() else {
        return Err(AstParseError::UnexpectedShape {
            expected: "value literal",
            found: "an operation".to_string(),
        });
    };

    let mut items = selection_set.items.into_iter();
    match (items.next(), items.next()) {
        (Some(graphql_parser::query::Selection::Field(mut field)), None)
            if field.arguments.len() == 1 => {
            let (_arg_name, value) = field.arguments.remove(0);
            Ok(value_into_static(value))
        },

        _ => Err(AstParseError::UnexpectedShape {
            expected: "value literal",
            found: value_src.to_string(),
        }),
    }
}

/// Parse a single, standalone GraphQL type annotation such as `[Int!]!`.
pub fn parse_type(type_src: &str) -> Result<query::Type> {
    let doc_src = format!("query ($__type: {type_src}) {{ __typename }}");
    let doc = graphql_parser::query::parse_query::<String>(doc_src.as_str())
        .map_err(|err| AstParseError::ParseError(err.to_string()))?;

    let Some(graphql_parser::query::Definition::Operation(
        graphql_parser::query::OperationDefinition::Query(query),
    )) = doc.definitions.into_iter().next() else {
        return Err(AstParseError::UnexpectedShape {
            expected: "type annotation",
            found: type_src.to_string(),
        });
    };

    let mut var_defs = query.variable_definitions.into_iter();
    match (var_defs.next(), var_defs.next()) {
        (Some(var_def), None) => Ok(type_into_static(var_def.var_type)),
        _ => Err(AstParseError::UnexpectedShape {
            expected: "type annotation",
            found: type_src.to_string(),
        }),
    }
}

fn type_into_static(
    ast_type: graphql_parser::query::Type<'_, String>,
) -> query::Type {
    use graphql_parser::query::Type;
    match ast_type {
        Type::NamedType(name) => Type::NamedType(name),
        Type::ListType(inner) =>
            Type::ListType(Box::new(type_into_static(*inner))),
        Type::NonNullType(inner) =>
            Type::NonNullType(Box::new(type_into_static(*inner))),
    }
}

fn value_into_static(
    value: graphql_parser::query::Value<'_, String>,
) -> Value {
    use graphql_parser::query::Value as V;
    match value {
        V::Variable(name) => V::Variable(name),
        V::Int(num) => V::Int(num),
        V::Float(num) => V::Float(num),
        V::String(str) => V::String(str),
        V::Boolean(bool) => V::Boolean(bool),
        V::Null => V::Null,
        V::Enum(name) => V::Enum(name),
        V::List(items) =>
            V::List(items.into_iter().map(value_into_static).collect()),
        V::Object(fields) =>
            V::Object(fields.into_iter().map(|(name, value)|
                (name, value_into_static(value))
            ).collect()),
    }
}
