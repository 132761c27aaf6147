use crate::ast;
use crate::types::BuiltinScalar;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::LiteralParser;
use crate::types::UntypedLiteralParser;
use crate::Value;

fn parse(parser: &dyn LiteralParser, value_src: &str) -> Option<Value> {
    parser.parse_literal(&ast::parse_value(value_src).expect("valid literal"))
}

#[test]
fn int_accepts_only_32_bit_int_literals() {
    assert_eq!(parse(&BuiltinScalar::Int, "2147483647"), Some(Value::Int(2147483647)));
    assert_eq!(parse(&BuiltinScalar::Int, "-2147483648"), Some(Value::Int(-2147483648)));
    assert_eq!(parse(&BuiltinScalar::Int, "2147483648"), None);
    assert_eq!(parse(&BuiltinScalar::Int, "1.0"), None);
    assert_eq!(parse(&BuiltinScalar::Int, "\"1\""), None);
}

#[test]
fn float_accepts_int_and_float_literals() {
    assert_eq!(parse(&BuiltinScalar::Float, "3"), Some(Value::Float(3.0)));
    assert_eq!(parse(&BuiltinScalar::Float, "-0.25"), Some(Value::Float(-0.25)));
    assert_eq!(parse(&BuiltinScalar::Float, "true"), None);
}

#[test]
fn string_and_boolean_accept_only_their_own_literals() {
    assert_eq!(
        parse(&BuiltinScalar::String, "\"hi\""),
        Some(Value::String("hi".to_string())),
    );
    assert_eq!(parse(&BuiltinScalar::String, "HI"), None);
    assert_eq!(parse(&BuiltinScalar::Boolean, "false"), Some(Value::Bool(false)));
    assert_eq!(parse(&BuiltinScalar::Boolean, "0"), None);
}

#[test]
fn id_accepts_string_and_int_literals_as_strings() {
    assert_eq!(
        parse(&BuiltinScalar::ID, "\"abc\""),
        Some(Value::String("abc".to_string())),
    );
    assert_eq!(
        parse(&BuiltinScalar::ID, "123"),
        Some(Value::String("123".to_string())),
    );
    assert_eq!(parse(&BuiltinScalar::ID, "1.5"), None);
}

#[test]
fn builtin_scalar_names() {
    assert_eq!(
        BuiltinScalar::ALL.iter().map(BuiltinScalar::name).collect::<Vec<_>>(),
        vec!["Boolean", "Float", "ID", "Int", "String"],
    );
}

#[test]
fn untyped_parser_converts_structurally() {
    assert_eq!(
        parse(&UntypedLiteralParser, "[1, 2.5, \"s\", true, null, ENUM]"),
        Some(Value::List(vec![
            Value::Int(1),
            Value::Float(2.5),
            Value::String("s".to_string()),
            Value::Bool(true),
            Value::Null,
            Value::Enum("ENUM".to_string()),
        ])),
    );
    let Some(Value::Object(fields)) = parse(&UntypedLiteralParser, "{a: {b: 1}}") else {
        panic!("Expected an object value");
    };
    assert_eq!(
        fields.get("a").and_then(Value::as_object).and_then(|a| a.get("b")),
        Some(&Value::Int(1)),
    );
}

#[test]
fn untyped_parser_rejects_nested_variables() {
    assert_eq!(parse(&UntypedLiteralParser, "[1, $two]"), None);
    assert_eq!(parse(&UntypedLiteralParser, "{a: $b}"), None);
}

#[test]
fn enum_parser_maps_names_to_values() {
    let enum_type = EnumType::new("Size", [
        EnumValue::new("SMALL").with_value(1),
        EnumValue::new("LARGE"),
    ]);

    assert_eq!(parse(&enum_type, "SMALL"), Some(Value::Int(1)));
    assert_eq!(parse(&enum_type, "LARGE"), Some(Value::Enum("LARGE".to_string())));
    assert_eq!(parse(&enum_type, "MEDIUM"), None);
    assert_eq!(parse(&enum_type, "\"SMALL\""), None);
    assert_eq!(
        enum_type.values().keys().collect::<Vec<_>>(),
        vec!["SMALL", "LARGE"],
    );
}
