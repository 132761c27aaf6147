use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: P,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.as_ref().to_path_buf(),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where a type or field was defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceLocation {
    /// Defined by GraphQL itself (e.g. the `Int` scalar).
    GraphQLBuiltIn,

    /// Constructed in Rust code rather than loaded from a schema document.
    Programmatic,

    Schema(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_schema_ast_position(
        file: &Path,
        pos: &graphql_parser::Pos,
    ) -> Self {
        Self::Schema(FilePosition::from_pos(file, *pos))
    }
}
impl std::convert::From<FilePosition> for SourceLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<builtin>"),
            Self::Programmatic => write!(f, "<programmatic>"),
            Self::Schema(file_pos) => write!(f, "{file_pos}"),
        }
    }
}
