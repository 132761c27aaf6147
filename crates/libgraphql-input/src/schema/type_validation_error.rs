use crate::loc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is an output type."
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SourceLocation,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error("Referenced a type named `{undefined_type_name}` at {ref_location}, but no such type is defined")]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        undefined_type_name: String,
    },
}
