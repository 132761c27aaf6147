mod enum_type;
mod enum_type_builder;
mod input_field;
mod input_object_type;
mod input_object_type_builder;
mod input_type;
mod list_type_annotation;
mod literal_parser;
mod named_type_annotation;
mod scalar_type;
mod scalar_type_builder;
mod type_annotation;
mod type_builder;
mod types_map_builder;

pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub(crate) use enum_type_builder::EnumTypeBuilder;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub(crate) use input_object_type_builder::InputObjectTypeBuilder;
pub(crate) use input_object_type_builder::PendingDefaultValue;
pub use input_type::InputType;
pub use input_type::NamedInputTypeRef;
pub use list_type_annotation::ListTypeAnnotation;
pub use literal_parser::BuiltinScalar;
pub use literal_parser::LiteralParser;
pub use literal_parser::UntypedLiteralParser;
pub use named_type_annotation::NamedTypeAnnotation;
pub use scalar_type::ScalarType;
pub(crate) use scalar_type_builder::ScalarTypeBuilder;
pub use type_annotation::TypeAnnotation;
pub(crate) use type_builder::TypeBuilder;
pub(crate) use types_map_builder::TypesMapBuilder;

#[cfg(test)]
mod tests;
