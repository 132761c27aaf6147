use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::ScalarType;

pub type NamedInputTypeRef = NamedRef<Schema, InputType>;

/// Represents a defined GraphQL
/// [input type](https://spec.graphql.org/October2021/#sec-Input-and-Output-Types).
///
/// Output-only types (objects, interfaces, unions) are never members of this
/// enum, so every named type a [`TypeAnnotation`](crate::types::TypeAnnotation)
/// resolves to is something a literal can be converted into.
#[derive(Clone, Debug)]
pub enum InputType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Scalar(ScalarType),
}
impl InputType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub(crate) fn as_input_object_mut(&mut self) -> Option<&mut InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Enum(type_) => type_.def_location(),
            Self::InputObject(type_) => type_.def_location(),
            Self::Scalar(type_) => type_.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(type_) => type_.description(),
            Self::InputObject(type_) => type_.description(),
            Self::Scalar(type_) => type_.description(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        *self.def_location() == loc::SourceLocation::GraphQLBuiltIn
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(type_) => type_.name(),
            Self::InputObject(type_) => type_.name(),
            Self::Scalar(type_) => type_.name(),
        }
    }
}
impl DerefByName for InputType {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
impl std::convert::From<EnumType> for InputType {
    fn from(value: EnumType) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InputObjectType> for InputType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(value)
    }
}
impl std::convert::From<ScalarType> for InputType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}
