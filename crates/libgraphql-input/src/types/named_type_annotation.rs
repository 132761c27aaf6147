use crate::schema::Schema;
use crate::types::InputType;
use crate::types::NamedInputTypeRef;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedInputTypeRef,
}
impl NamedTypeAnnotation {
    /// Look up the [`InputType`] this annotation names. Returns `None` if the
    /// schema has no type by that name.
    pub fn input_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema InputType> {
        self.type_ref.deref(schema).ok()
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
