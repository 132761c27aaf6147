use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<Value>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) output_key: Option<String>,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputField {
    pub fn new(name: impl AsRef<str>, type_annotation: TypeAnnotation) -> Self {
        Self {
            def_location: loc::SourceLocation::Programmatic,
            default_value: None,
            description: None,
            name: name.as_ref().to_string(),
            output_key: None,
            type_annotation,
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<Value>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// Store this field's value under `output_key` (instead of the field's
    /// name) in objects produced from literals.
    pub fn with_output_key(mut self, output_key: impl AsRef<str>) -> Self {
        self.output_key = Some(output_key.as_ref().to_string());
        self
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InputField`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The value used when a literal omits this field (or supplies an unbound
    /// variable for it).
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The description of this [`InputField`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the input field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`InputField`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The key this field's value is stored under in a produced object.
    /// Falls back to [`InputField::name()`].
    pub fn output_key(&self) -> &str {
        self.output_key.as_deref().unwrap_or(self.name.as_str())
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn set_default_value(&mut self, default_value: Option<Value>) {
        self.default_value = default_value;
    }
}
