use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InputType;
use crate::types::TypeAnnotation;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// A default-value literal from a schema document that can only be converted
/// once every type in the schema is known.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PendingDefaultValue {
    pub field_name: String,
    pub literal: ast::Value,
}

#[derive(Debug)]
pub(crate) struct InputObjectTypeBuilder {
    pending_defaults: IndexMap<String, Vec<PendingDefaultValue>>,
}

impl InputObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            pending_defaults: IndexMap::new(),
        }
    }

    /// Default-value literals keyed by the name of the input object type that
    /// declares them, in the order they were visited.
    pub fn into_pending_defaults(self) -> IndexMap<String, Vec<PendingDefaultValue>> {
        self.pending_defaults
    }
}

#[inherent]
impl TypeBuilder for InputObjectTypeBuilder {
    type AstTypeDef = ast::schema::InputObjectType;

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let inputobjdef_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &def.position,
        );

        let mut fields = IndexMap::<String, InputField>::new();
        let mut pending_defaults = vec![];
        for field in &def.fields {
            let fielddef_srcloc = loc::SourceLocation::from_schema_ast_position(
                file_path,
                &field.position,
            );

            // The input field must not have a name which begins with the
            // characters "__" (two underscores).
            //
            // https://spec.graphql.org/October2021/#sel-IAHhBXDDBDCAACCTx5b
            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: fielddef_srcloc,
                    field_name: field.name.to_string(),
                    type_name: def.name.to_string(),
                });
            }

            if let Some(existing_field) = fields.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: def.name.to_string(),
                    field_name: field.name.to_string(),
                    field_def1: existing_field.def_location.to_owned(),
                    field_def2: fielddef_srcloc,
                });
            }

            if let Some(default_literal) = &field.default_value {
                pending_defaults.push(PendingDefaultValue {
                    field_name: field.name.to_string(),
                    literal: default_literal.to_owned(),
                });
            }

            fields.insert(field.name.to_string(), InputField {
                def_location: fielddef_srcloc,
                default_value: None,
                description: field.description.to_owned(),
                name: field.name.to_string(),
                output_key: None,
                type_annotation: TypeAnnotation::from_ast_type(&field.value_type),
            });
        }

        types_builder.add_new_type(
            def.name.as_str(),
            &inputobjdef_srcloc,
            InputType::InputObject(InputObjectType {
                def_location: inputobjdef_srcloc.to_owned(),
                description: def.description.to_owned(),
                fields,
                name: def.name.to_string(),
            }),
        )?;

        if !pending_defaults.is_empty() {
            self.pending_defaults.insert(def.name.to_string(), pending_defaults);
        }
        Ok(())
    }
}
