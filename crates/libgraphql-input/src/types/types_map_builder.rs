use crate::loc;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::BuiltinScalar;
use crate::types::InputType;
use crate::types::ScalarType;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    output_type_locations: HashMap<String, loc::SourceLocation>,
    pub(super) types: HashMap<String, InputType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            output_type_locations: HashMap::new(),
            types: BuiltinScalar::ALL.iter()
                .map(|scalar| (
                    scalar.name().to_string(),
                    InputType::Scalar(ScalarType::builtin(*scalar)),
                ))
                .collect(),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
        type_: InputType,
    ) -> Result<()> {
        self.check_new_type_name(type_name, type_loc)?;
        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    /// Object, interface and union types can't be converted into, but their
    /// names still occupy the schema's type namespace.
    pub fn add_output_type_name(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
    ) -> Result<()> {
        self.check_new_type_name(type_name, type_loc)?;
        self.output_type_locations.insert(type_name.to_string(), type_loc.to_owned());
        Ok(())
    }

    fn check_new_type_name(
        &self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        let conflicting_loc =
            self.types.get(type_name)
                .map(|conflicting_type| conflicting_type.def_location())
                .or_else(|| self.output_type_locations.get(type_name));
        if let Some(conflicting_loc) = conflicting_loc {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_loc.to_owned(),
                def2: type_loc.to_owned(),
            });
        }

        Ok(())
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut InputType> {
        self.types.get_mut(type_name)
    }

    pub fn into_types_map(self) -> Result<HashMap<String, InputType>> {
        // Final validation of all types together.
        let mut errors = vec![];
        for type_ in self.types.values() {
            let InputType::InputObject(input_obj_type) = type_ else {
                continue;
            };

            for field in input_obj_type.fields().values() {
                let innermost_type_name =
                    field.type_annotation()
                        .innermost_named_type_annotation()
                        .graphql_type_name();

                if self.types.contains_key(innermost_type_name) {
                    continue;
                }

                // Input object fields can not be declared with an output type.
                //
                // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
                errors.push(
                    if self.output_type_locations.contains_key(innermost_type_name) {
                        TypeValidationError::InvalidInputFieldWithOutputType {
                            def_location: field.def_location().to_owned(),
                            field_name: field.name().to_string(),
                            invalid_type_name: innermost_type_name.to_string(),
                            parent_type_name: input_obj_type.name().to_string(),
                        }
                    } else {
                        TypeValidationError::UndefinedTypeName {
                            ref_location: field.def_location().to_owned(),
                            undefined_type_name: innermost_type_name.to_string(),
                        }
                    }
                );
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }
}
