use crate::ast;
use crate::types::ListTypeAnnotation;
use crate::types::NamedInputTypeRef;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type of an [`InputField`](crate::types::InputField),
/// a variable, or an argument.
///
/// Non-null-ness is carried as a `nullable` flag on each level rather than as
/// a separate wrapper node, so `Int!` is `Named { nullable: false, .. }`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Build a list annotation (`[inner]`, or `[inner]!` when not nullable).
    pub fn list(inner: impl Into<TypeAnnotation>, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_ref: Box::new(inner.into()),
            nullable,
        })
    }

    /// Build a named annotation (`Name`, or `Name!` when not nullable).
    pub fn named(type_name: impl AsRef<str>, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable,
            type_ref: NamedInputTypeRef::new(type_name),
        })
    }

    /// The same annotation with its outermost level marked non-nullable.
    pub fn non_null(self) -> Self {
        match self {
            Self::List(annot) => Self::List(ListTypeAnnotation {
                nullable: false,
                ..annot
            }),
            Self::Named(annot) => Self::Named(NamedTypeAnnotation {
                nullable: false,
                ..annot
            }),
        }
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub fn from_ast_type(
        ast_type: &graphql_parser::query::Type<'_, String>,
    ) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        ast_type: &graphql_parser::query::Type<'_, String>,
        nullable: bool,
    ) -> Self {
        use graphql_parser::query::Type;
        match ast_type {
            Type::ListType(inner) =>
                Self::list(Self::from_ast_type_impl(inner, true), nullable),

            Type::NamedType(name) =>
                Self::named(name, nullable),

            Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Parse a type annotation from GraphQL syntax (e.g. `"[Int!]!"`).
    pub fn parse(type_src: &str) -> Result<Self, ast::AstParseError> {
        Ok(Self::from_ast_type(&ast::parse_type(type_src)?))
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            Self::Named(named_annot)
                => named_annot,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            Self::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
