use crate::schema::SchemaBuildError;
use crate::types::TypesMapBuilder;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Turns one kind of schema-document type definition into an
/// [`InputType`](crate::types::InputType) registered on a [`TypesMapBuilder`].
pub(crate) trait TypeBuilder: Sized {
    type AstTypeDef;

    fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: &Path,
        def: &Self::AstTypeDef,
    ) -> Result<()>;
}
