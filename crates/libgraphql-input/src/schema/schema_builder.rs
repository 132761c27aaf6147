use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::DefaultValueResolver;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::EnumTypeBuilder;
use crate::types::InputObjectTypeBuilder;
use crate::types::InputType;
use crate::types::LiteralParser;
use crate::types::ScalarTypeBuilder;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [Schema].
///
/// Types can be loaded from GraphQL schema documents (only `scalar`, `enum`
/// and `input` definitions become convertible types) or added directly.
#[derive(Debug)]
pub struct SchemaBuilder {
    enum_builder: EnumTypeBuilder,
    inputobject_builder: InputObjectTypeBuilder,
    scalar_builder: ScalarTypeBuilder,
    scalar_parsers: IndexMap<String, Arc<dyn LiteralParser>>,
    str_load_counter: u16,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (type_name, parser) in self.scalar_parsers.drain(..) {
            match self.types_map_builder.get_type_mut(type_name.as_str()) {
                Some(InputType::Scalar(scalar_type)) =>
                    scalar_type.set_parser(parser),

                Some(non_scalar_type) =>
                    return Err(SchemaBuildError::ScalarParserForNonScalarType {
                        def_location: non_scalar_type.def_location().to_owned(),
                        type_name,
                    }),

                None =>
                    return Err(SchemaBuildError::ScalarParserForUndefinedType {
                        type_name,
                    }),
            }
        }

        let types = self.types_map_builder.into_types_map()?;
        let mut schema = Schema { types };

        let pending_defaults = self.inputobject_builder.into_pending_defaults();
        log::debug!(
            "Resolving schema-defined default values for {} input object types.",
            pending_defaults.len(),
        );
        DefaultValueResolver::new(pending_defaults).resolve(&mut schema);

        Ok(schema)
    }

    pub fn new() -> Self {
        Self {
            enum_builder: EnumTypeBuilder::new(),
            inputobject_builder: InputObjectTypeBuilder::new(),
            scalar_builder: ScalarTypeBuilder::new(),
            scalar_parsers: IndexMap::new(),
            str_load_counter: 0,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    /// Add a type constructed in Rust (rather than loaded from a schema
    /// document).
    pub fn add_type(mut self, type_: impl Into<InputType>) -> Result<Self> {
        let type_ = type_.into();
        let type_name = type_.name().to_string();
        let type_loc = type_.def_location().to_owned();
        self.types_map_builder.add_new_type(type_name.as_str(), &type_loc, type_)?;
        Ok(self)
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_schema_file(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            ast::schema::parse(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    /// Parse literals of the scalar named `type_name` with `parser`.
    ///
    /// Scalars loaded from a schema document otherwise convert literals
    /// structurally (see [`UntypedLiteralParser`](crate::types::UntypedLiteralParser)).
    /// Registering a parser for a built-in scalar replaces the built-in one.
    pub fn register_scalar_parser(
        mut self,
        type_name: impl AsRef<str>,
        parser: impl LiteralParser + 'static,
    ) -> Self {
        self.scalar_parsers.insert(type_name.as_ref().to_string(), Arc::new(parser));
        self
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, &type_def),

            Definition::SchemaDefinition(schema_def) => {
                log::debug!(
                    "Ignoring schema definition at {}.",
                    loc::FilePosition::from_pos(file_path, schema_def.position),
                );
                Ok(())
            },

            Definition::TypeExtension(_) => {
                log::debug!("Ignoring type extension in {file_path:?}.");
                Ok(())
            },

            Definition::DirectiveDefinition(directive_def) => {
                log::debug!(
                    "Ignoring directive definition `@{}` at {}.",
                    directive_def.name,
                    loc::FilePosition::from_pos(file_path, directive_def.position),
                );
                Ok(())
            },
        }
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: &ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let (output_type_name, position) = match type_def {
            TypeDefinition::Enum(enum_def) =>
                return self.enum_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    enum_def,
                ),

            TypeDefinition::InputObject(inputobj_def) =>
                return self.inputobject_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    inputobj_def,
                ),

            TypeDefinition::Scalar(scalar_def) =>
                return self.scalar_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    scalar_def,
                ),

            TypeDefinition::Interface(iface_def) =>
                (iface_def.name.as_str(), iface_def.position),
            TypeDefinition::Object(obj_def) =>
                (obj_def.name.as_str(), obj_def.position),
            TypeDefinition::Union(union_def) =>
                (union_def.name.as_str(), union_def.position),
        };

        log::trace!("Recording output type `{output_type_name}`.");
        self.types_map_builder.add_output_type_name(
            output_type_name,
            &loc::SourceLocation::from_schema_ast_position(file_path, &position),
        )
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple values named `{value_name}` were defined on the `{enum_name}` enum type")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        enum_def_location: loc::SourceLocation,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
        value_name: String,
    },

    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` input object type")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined ({def1} and {def2})")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Enum types must define one or more unique values, but `{type_name}` defines none")]
    EnumWithNoValues {
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error("Field names must not start with `__`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Error parsing schema string from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("A literal parser was registered for `{type_name}`, which is not a scalar type")]
    ScalarParserForNonScalarType {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("A literal parser was registered for `{type_name}`, but no such type is defined")]
    ScalarParserForUndefinedType {
        type_name: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
