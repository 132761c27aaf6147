use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::InputType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::Value;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct EnumTypeBuilder;

impl EnumTypeBuilder {
    pub fn new() -> Self {
        Self
    }
}

#[inherent]
impl TypeBuilder for EnumTypeBuilder {
    type AstTypeDef = ast::schema::EnumType;

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let enumdef_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &def.position,
        );

        if def.values.is_empty() {
            return Err(SchemaBuildError::EnumWithNoValues {
                type_name: def.name.to_string(),
                location: enumdef_srcloc,
            });
        }

        let mut values = IndexMap::<String, EnumValue>::new();
        for val in &def.values {
            let value_srcloc = loc::SourceLocation::from_schema_ast_position(
                file_path,
                &val.position,
            );

            if let Some(existing_value) = values.get(val.name.as_str()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: def.name.to_string(),
                    enum_def_location: enumdef_srcloc,
                    value_def1: existing_value.def_location.to_owned(),
                    value_def2: value_srcloc,
                    value_name: val.name.to_string(),
                });
            }

            values.insert(val.name.to_string(), EnumValue {
                def_location: value_srcloc,
                description: val.description.to_owned(),
                name: val.name.to_string(),
                value: Value::Enum(val.name.to_string()),
            });
        }

        types_builder.add_new_type(
            def.name.as_str(),
            &enumdef_srcloc,
            InputType::Enum(EnumType {
                def_location: enumdef_srcloc.to_owned(),
                description: def.description.to_owned(),
                name: def.name.to_string(),
                values,
            }),
        )
    }
}
