use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(super) def_location: loc::DefLocation,
    pub(super) nullable: bool,
    pub(super) type_name: String,
}
impl NamedTypeAnnotation {
    pub fn def_location(&self) -> &loc::DefLocation {
        &self.def_location
    }

    /// Looks up the referenced type. Returns `None` for a dangling reference,
    /// which a [`SchemaBuilder`](crate::schema::SchemaBuilder) does not reject.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.lookup_type(self.type_name.as_str())
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        format!(
            "{}{}",
            self.type_name,
            if self.nullable { "" } else { "!" },
        )
    }
}
