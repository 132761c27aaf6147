use crate::schema::Schema;
use crate::types::PendingDefaultValue;
use crate::value_from_ast;
use indexmap::IndexMap;

/// Converts the default-value literals of schema-document input fields into
/// [`Value`](crate::Value)s.
///
/// A default like `filter: Filter = {}` depends on the defaults of
/// `Filter`'s own fields, so the defaults of a field's innermost type are
/// resolved before the field's own default. A type whose defaults are already
/// being resolved further up the stack is not revisited; its unresolved
/// defaults are seen as absent.
pub(super) struct DefaultValueResolver {
    pending: IndexMap<String, Vec<PendingDefaultValue>>,
}
impl DefaultValueResolver {
    pub fn new(pending: IndexMap<String, Vec<PendingDefaultValue>>) -> Self {
        Self { pending }
    }

    pub fn resolve(mut self, schema: &mut Schema) {
        while let Some(type_name) = self.pending.keys().next().cloned() {
            self.resolve_type_defaults(type_name.as_str(), schema);
        }
    }

    fn resolve_type_defaults(&mut self, type_name: &str, schema: &mut Schema) {
        let Some(pending_defaults) = self.pending.shift_remove(type_name) else {
            return;
        };

        for PendingDefaultValue { field_name, literal } in pending_defaults {
            let Some(type_annot) =
                schema.input_type(type_name)
                    .and_then(|type_| type_.as_input_object())
                    .and_then(|input_obj_type| input_obj_type.field(field_name.as_str()))
                    .map(|field| field.type_annotation().to_owned()) else {
                continue;
            };

            let dependency_type_name =
                type_annot.innermost_named_type_annotation()
                    .graphql_type_name()
                    .to_string();
            self.resolve_type_defaults(dependency_type_name.as_str(), schema);

            let default_value =
                value_from_ast(Some(&literal), &type_annot, schema, None);
            if default_value.is_none() {
                log::warn!(
                    "The default value for `{type_name}.{field_name}` could \
                    not be converted to `{type_annot}`; the field will have no \
                    default value.",
                );
            }

            if let Some(field) =
                schema.types.get_mut(type_name)
                    .and_then(|type_| type_.as_input_object_mut())
                    .and_then(|input_obj_type| input_obj_type.field_mut(field_name.as_str())) {
                field.set_default_value(default_value);
            }
        }
    }
}
