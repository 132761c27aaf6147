use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(super) inner_type_ref: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}
impl ListTypeAnnotation {
    /// The annotation of each item in the list.
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
