use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

/// Represents a defined field on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::DefLocation,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}

impl Field {
    pub fn def_location(&self) -> &loc::DefLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The field's return type with all list/non-null wrapping stripped,
    /// resolved against `schema`.
    pub fn named_return_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.type_annotation
            .innermost_named_type_annotation()
            .graphql_type(schema)
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
