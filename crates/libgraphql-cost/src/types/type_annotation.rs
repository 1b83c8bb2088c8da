use crate::ast;
use crate::loc;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the declared return type of a [`Field`](crate::types::Field),
/// including any list/non-null wrapping.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
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

    pub(crate) fn from_ast_type(
        def_location: &loc::DefLocation,
        ast_type: &ast::schema::Type,
    ) -> Self {
        Self::from_ast_type_impl(def_location, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        def_location: &loc::DefLocation,
        ast_type: &ast::schema::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    def_location: def_location.clone(),
                    inner_type: Box::new(Self::from_ast_type_impl(
                        def_location,
                        inner,
                        true,
                    )),
                    nullable,
                }),

            ast::schema::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    def_location: def_location.clone(),
                    nullable,
                    type_name: name.to_string(),
                }),

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(def_location, inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it. This is the "named type" of the
    /// annotation: `[Item!]!` and `Item` both unwrap to `Item`.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type, .. })
                => inner_type.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::List(list_annot) => list_annot.to_graphql_string(),
            Self::Named(named_annot) => named_annot.to_graphql_string(),
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
