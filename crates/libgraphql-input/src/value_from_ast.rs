use crate::ast;
use crate::schema::Schema;
use crate::types::InputObjectType;
use crate::types::InputType;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;
use crate::Value;
use crate::Variables;
use indexmap::IndexMap;

/// Given a literal `value_ast` that is known to be valid for `type_annot`,
/// build the runtime [`Value`] it denotes.
///
/// Returns `None` when no value can be determined: `value_ast` is `None`, it
/// is a variable that `variables` doesn't bind, or (when the literal doesn't
/// actually fit the type) its shape has no meaning for `type_annot`. A `null`
/// literal always produces [`Value::Null`], never `None`.
///
/// A scalar or enum literal rejected by its type's
/// [`LiteralParser`](crate::types::LiteralParser) is invalid rather than
/// absent: it produces [`Value::Null`], so it never triggers a field default
/// or the list rule below.
///
/// The literal is assumed to have been validated against the schema already,
/// so non-null annotations are not re-checked and variable values are used
/// as-is without being coerced to `type_annot`.
pub fn value_from_ast(
    value_ast: Option<&ast::Value>,
    type_annot: &TypeAnnotation,
    schema: &Schema,
    variables: Option<&Variables>,
) -> Option<Value> {
    AstValueConverter { schema, variables }.convert(value_ast, type_annot)
}

struct AstValueConverter<'a> {
    schema: &'a Schema,
    variables: Option<&'a Variables>,
}
impl AstValueConverter<'_> {
    fn convert(
        &self,
        value_ast: Option<&ast::Value>,
        type_annot: &TypeAnnotation,
    ) -> Option<Value> {
        let value_ast = match value_ast? {
            ast::Value::Null => return Some(Value::Null),
            ast::Value::Variable(var_name) => return self.variable_value(var_name),
            value_ast => value_ast,
        };

        match type_annot {
            TypeAnnotation::List(list_annot) =>
                self.convert_list(value_ast, list_annot.inner_type_annotation()),

            TypeAnnotation::Named(named_annot) =>
                self.convert_named(value_ast, named_annot),
        }
    }

    fn convert_input_object(
        &self,
        value_ast: &ast::Value,
        input_obj_type: &InputObjectType,
    ) -> Option<Value> {
        let ast::Value::Object(field_asts) = value_ast else {
            log::trace!(
                "Expected an object literal for `{}`; no value.",
                input_obj_type.name(),
            );
            return None;
        };

        let fields: IndexMap<String, Value> =
            input_obj_type.fields().values().filter_map(|field| {
                let field_value =
                    self.convert(field_asts.get(field.name()), field.type_annotation())
                        .or_else(|| field.default_value().cloned())?;
                Some((field.output_key().to_string(), field_value))
            }).collect();

        Some(Value::Object(fields))
    }

    fn convert_list(
        &self,
        value_ast: &ast::Value,
        item_annot: &TypeAnnotation,
    ) -> Option<Value> {
        let items: Vec<Option<Value>> = match value_ast {
            ast::Value::List(item_asts) =>
                item_asts.iter()
                    .map(|item_ast| self.convert(Some(item_ast), item_annot))
                    .collect(),

            // A single item where a list is expected is treated as a list of
            // one.
            //
            // https://spec.graphql.org/October2021/#sec-List.Input-Coercion
            item_ast => vec![self.convert(Some(item_ast), item_annot)],
        };

        // Only the first item decides whether the whole list has a value.
        if let Some(None) = items.first() {
            log::trace!("First item of a `[{item_annot}]` list has no value.");
            return None;
        }

        Some(Value::List(
            items.into_iter()
                .map(|item| item.unwrap_or(Value::Null))
                .collect(),
        ))
    }

    fn convert_named(
        &self,
        value_ast: &ast::Value,
        named_annot: &NamedTypeAnnotation,
    ) -> Option<Value> {
        let Some(input_type) = named_annot.input_type(self.schema) else {
            log::warn!(
                "No type named `{}` is defined in the schema.",
                named_annot.graphql_type_name(),
            );
            return None;
        };

        let leaf_value = match input_type {
            InputType::InputObject(input_obj_type) =>
                return self.convert_input_object(value_ast, input_obj_type),
            InputType::Enum(enum_type) =>
                enum_type.parse_literal(value_ast),
            InputType::Scalar(scalar_type) =>
                scalar_type.parse_literal(value_ast),
        };

        Some(leaf_value.unwrap_or_else(|| {
            log::debug!(
                "`{value_ast}` is not a valid `{}` literal.",
                input_type.name(),
            );
            Value::Null
        }))
    }

    fn variable_value(&self, var_name: &str) -> Option<Value> {
        let value = self.variables?.get(var_name).cloned();
        if value.is_none() {
            log::trace!("Variable `${var_name}` is not bound.");
        }
        value
    }
}
