use crate::ast;
use crate::loc;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::LiteralParser;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::ReadContentError;
use crate::Value;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Parses literals as their length when they are strings.
#[derive(Debug)]
struct StrLenParser;
impl LiteralParser for StrLenParser {
    fn parse_literal(&self, value_ast: &ast::Value) -> Option<Value> {
        match value_ast {
            ast::Value::String(str) => Some(Value::Int(str.len() as i64)),
            _ => None,
        }
    }
}

fn default_of(schema: &crate::schema::Schema, type_name: &str, field_name: &str) -> Option<Value> {
    schema.input_type(type_name)
        .and_then(|type_| type_.as_input_object())
        .and_then(|type_| type_.field(field_name))
        .and_then(|field| field.default_value().cloned())
}

#[test]
fn builtin_scalars_are_always_present() -> Result<()> {
    let schema = SchemaBuilder::new().build()?;
    for name in ["Boolean", "Float", "ID", "Int", "String"] {
        let type_ = schema.input_type(name).expect("builtin scalar is defined");
        assert!(type_.as_scalar().is_some());
        assert!(type_.is_builtin());
    }
    assert_eq!(schema.defined_types().count(), 0);
    Ok(())
}

#[test]
fn loads_input_types_and_skips_output_types() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "
            \"\"\"A point\"\"\"
            input Point { x: Int }
            enum Color { RED }
            scalar Date
            type Query { field: Int }
            interface Node { id: ID! }
            union Anything = Query
            directive @cached on FIELD
            schema { query: Query }
            extend input Point { y: Int }
        ")?
        .build()?;

    let mut names = schema.defined_types().map(|t| t.name()).collect::<Vec<_>>();
    names.sort();
    assert_eq!(names, vec!["Color", "Date", "Point"]);
    assert!(!schema.contains_type("Query"));
    assert_eq!(schema.input_type("Point").and_then(|t| t.description()), Some("A point"));

    let point = schema.input_type("Point")
        .and_then(|t| t.as_input_object())
        .expect("Point is an input object");
    assert_eq!(point.fields().keys().collect::<Vec<_>>(), vec!["x"]);
    assert!(matches!(point.def_location(), loc::SourceLocation::Schema(_)));

    Ok(())
}

#[test]
fn schema_defaults_are_converted_with_field_types() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "
            enum Color { RED GREEN }
            input Options {
                limit: Int = 10,
                ratio: Float = 1,
                colors: [Color!] = RED,
                name: String = null,
            }
        ")?
        .build()?;

    assert_eq!(default_of(&schema, "Options", "limit"), Some(Value::Int(10)));
    assert_eq!(default_of(&schema, "Options", "ratio"), Some(Value::Float(1.0)));
    assert_eq!(
        default_of(&schema, "Options", "colors"),
        Some(Value::List(vec![Value::Enum("RED".to_string())])),
    );
    assert_eq!(default_of(&schema, "Options", "name"), Some(Value::Null));

    Ok(())
}

#[test]
fn nested_schema_defaults_see_inner_defaults() -> Result<()> {
    // `Outer` is visited before `Inner`, so the inner default must be
    // resolved on demand.
    let schema = SchemaBuilder::new()
        .load_str(None, "
            input Outer { inner: Inner = {} }
            input Inner { depth: Int = 3 }
        ")?
        .build()?;

    let mut expected = indexmap::IndexMap::new();
    expected.insert("depth".to_string(), Value::Int(3));
    assert_eq!(default_of(&schema, "Outer", "inner"), Some(Value::Object(expected)));

    Ok(())
}

#[test]
fn self_referential_schema_default_terminates() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "input Node { next: Node = {}, value: Int }")?
        .build()?;

    assert_eq!(
        default_of(&schema, "Node", "next"),
        Some(Value::Object(indexmap::IndexMap::new())),
    );

    Ok(())
}

#[test]
fn invalid_schema_default_converts_to_null() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "input Options { limit: Int = \"ten\" }")?
        .build()?;

    assert_eq!(default_of(&schema, "Options", "limit"), Some(Value::Null));

    Ok(())
}

#[test]
fn mismatched_schema_default_shape_leaves_no_default() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "
            input Point { x: Int }
            input Options { origin: Point = 3 }
        ")?
        .build()?;

    assert_eq!(default_of(&schema, "Options", "origin"), None);

    Ok(())
}

#[test]
fn registered_parser_replaces_untyped_scalar_parsing() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "scalar Length")?
        .register_scalar_parser("Length", StrLenParser)
        .build()?;

    let length = schema.input_type("Length")
        .and_then(|t| t.as_scalar())
        .expect("Length is a scalar");
    assert_eq!(
        length.parse_literal(&ast::Value::String("four".to_string())),
        Some(Value::Int(4)),
    );
    assert_eq!(length.parse_literal(&ast::Value::Boolean(true)), None);

    Ok(())
}

#[test]
fn parser_for_undefined_type_is_an_error() {
    let result = SchemaBuilder::new()
        .register_scalar_parser("Nope", StrLenParser)
        .build();

    assert_eq!(
        result.err(),
        Some(SchemaBuildError::ScalarParserForUndefinedType {
            type_name: "Nope".to_string(),
        }),
    );
}

#[test]
fn parser_for_non_scalar_type_is_an_error() -> Result<()> {
    let result = SchemaBuilder::new()
        .load_str(None, "enum Color { RED }")?
        .register_scalar_parser("Color", StrLenParser)
        .build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::ScalarParserForNonScalarType { type_name, .. })
            if type_name == "Color"
    ));

    Ok(())
}

#[test]
fn programmatic_types_mix_with_loaded_types() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "enum Color { RED }")?
        .add_type(ScalarType::new("Length", StrLenParser).with_description("len"))?
        .add_type(EnumType::new("Size", [EnumValue::new("S").with_value(1)]))?
        .add_type(InputObjectType::new("Box", [
            InputField::new("color", TypeAnnotation::named("Color", true)),
            InputField::new("size", TypeAnnotation::named("Size", false))
                .with_default_value(Value::Int(1)),
        ]).with_description("A box"))?
        .build()?;

    assert_eq!(schema.defined_types().count(), 4);
    assert_eq!(
        schema.input_type("Box").map(|t| t.def_location()),
        Some(&loc::SourceLocation::Programmatic),
    );
    assert_eq!(default_of(&schema, "Box", "size"), Some(Value::Int(1)));

    Ok(())
}

#[test]
fn duplicate_type_definition_is_an_error() {
    let result = SchemaBuilder::new()
        .load_str(None, "input Point { x: Int }\ntype Point { x: Int }");

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
            if type_name == "Point"
    ));
}

#[test]
fn redefining_a_builtin_scalar_is_an_error() {
    let result = SchemaBuilder::new().load_str(None, "scalar Int");

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateTypeDefinition {
            def1: loc::SourceLocation::GraphQLBuiltIn,
            ..
        })
    ));
}

#[test]
fn duplicate_input_field_is_an_error() {
    let result = SchemaBuilder::new()
        .load_str(None, "input Point { x: Int, x: Float }");

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. })
            if field_name == "x"
    ));
}

#[test]
fn duplicate_enum_value_is_an_error() {
    let result = SchemaBuilder::new()
        .load_str(None, "enum Color { RED RED }");

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateEnumValueDefinition { value_name, .. })
            if value_name == "RED"
    ));
}

#[test]
fn dunder_prefixed_names_are_errors() {
    assert!(matches!(
        SchemaBuilder::new().load_str(None, "input __Point { x: Int }"),
        Err(SchemaBuildError::InvalidDunderPrefixedTypeName { .. }),
    ));
    assert!(matches!(
        SchemaBuilder::new().load_str(None, "input Point { __x: Int }"),
        Err(SchemaBuildError::InvalidDunderPrefixedFieldName { .. }),
    ));
}

#[test]
fn input_field_with_undefined_type_is_an_error() -> Result<()> {
    let result = SchemaBuilder::new()
        .load_str(Some(PathBuf::from("schema.graphql")), "input Point { x: Coordinate }")?
        .build();

    let errors = match result {
        Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
        other => panic!("Expected type validation errors: {other:?}"),
    };
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        TypeValidationError::UndefinedTypeName { undefined_type_name, .. }
            if undefined_type_name == "Coordinate"
    ));

    Ok(())
}

#[test]
fn input_field_with_output_type_is_an_error() -> Result<()> {
    let result = SchemaBuilder::new()
        .load_str(None, "type User { id: ID }\ninput Filter { user: [User!] }")?
        .build();

    let errors = match result {
        Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
        other => panic!("Expected type validation errors: {other:?}"),
    };
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        TypeValidationError::InvalidInputFieldWithOutputType {
            field_name,
            invalid_type_name,
            parent_type_name,
            ..
        } if field_name == "user"
            && invalid_type_name == "User"
            && parent_type_name == "Filter"
    ));

    Ok(())
}

#[test]
fn parse_errors_name_the_source() {
    let result = SchemaBuilder::new()
        .load_str(Some(PathBuf::from("broken.graphql")), "input Point {");

    assert!(matches!(
        result,
        Err(SchemaBuildError::ParseError { file, .. })
            if file == PathBuf::from("broken.graphql")
    ));
}

#[test]
fn missing_schema_file_is_an_error() {
    let result = SchemaBuilder::new()
        .load_file("/definitely/not/a/real/schema.graphql");

    let Err(SchemaBuildError::SchemaFileReadError(err)) = result else {
        panic!("Expected a schema file read error");
    };
    assert!(matches!(
        *err,
        ReadContentError::Io { ref file_path, kind: std::io::ErrorKind::NotFound, .. }
            if file_path == Path::new("/definitely/not/a/real/schema.graphql")
    ));
}

#[test]
fn schema_directory_is_not_a_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = SchemaBuilder::new().load_file(dir.path());

    assert_eq!(
        result.err(),
        Some(SchemaBuildError::SchemaFileReadError(Box::new(
            ReadContentError::NotAFile(dir.path().to_path_buf()),
        ))),
    );
}

#[test]
fn non_utf8_schema_file_reports_offset() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file_path = dir.path().join("schema.graphql");
    std::fs::write(&file_path, b"scalar D\xffate").expect("write schema");

    assert_eq!(
        SchemaBuilder::new().load_file(&file_path).err(),
        Some(SchemaBuildError::SchemaFileReadError(Box::new(
            ReadContentError::InvalidUtf8 { file_path, valid_up_to: 8 },
        ))),
    );
}

#[test]
fn schema_files_load_from_disk() -> Result<()> {
    let dir = tempfile::tempdir().expect("temp dir");
    let file_path = dir.path().join("schema.graphql");
    std::fs::write(&file_path, "input Point { x: Int = 1 }").expect("write schema");

    let schema = SchemaBuilder::new().load_file(&file_path)?.build()?;
    assert_eq!(default_of(&schema, "Point", "x"), Some(Value::Int(1)));

    Ok(())
}
