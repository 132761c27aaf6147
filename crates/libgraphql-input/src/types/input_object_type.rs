use crate::loc;
use crate::types::InputField;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(super) def_location: loc::SourceLocation,
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, InputField>,
    pub(super) name: String,
}
impl InputObjectType {
    pub fn new(
        name: impl AsRef<str>,
        fields: impl IntoIterator<Item = InputField>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::Programmatic,
            description: None,
            fields: fields.into_iter()
                .map(|field| (field.name.to_owned(), field))
                .collect(),
            name: name.as_ref().to_string(),
        }
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InputObjectType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, field_name: &str) -> Option<&InputField> {
        self.fields.get(field_name)
    }

    /// The [`InputField`]s of this type, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub(crate) fn field_mut(&mut self, field_name: &str) -> Option<&mut InputField> {
        self.fields.get_mut(field_name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
