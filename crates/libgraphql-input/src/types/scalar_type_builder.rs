use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::InputType;
use crate::types::ScalarType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use inherent::inherent;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct ScalarTypeBuilder;

impl ScalarTypeBuilder {
    pub fn new() -> Self {
        Self
    }
}

#[inherent]
impl TypeBuilder for ScalarTypeBuilder {
    type AstTypeDef = ast::schema::ScalarType;

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let scalardef_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &def.position,
        );

        log::trace!(
            "Defining custom scalar `{}` with the untyped literal parser.",
            def.name,
        );
        types_builder.add_new_type(
            def.name.as_str(),
            &scalardef_srcloc,
            InputType::Scalar(ScalarType::from_schema_def(
                scalardef_srcloc.to_owned(),
                def.description.to_owned(),
                def.name.as_str(),
            )),
        )
    }
}
