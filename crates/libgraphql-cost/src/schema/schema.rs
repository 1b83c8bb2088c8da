use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use std::collections::HashMap;

/// Represents an immutable GraphQL type graph: every named type plus the
/// object types bound to each root operation.
///
/// A [`Schema`] is only ever read during estimation, so one instance can be
/// shared by any number of concurrent estimations.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) query_type: String,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// This factors in any `schema { mutation: ... }` override, so prefer it
    /// to looking up a type named `"Mutation"`.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Mutation)
            .and_then(GraphQLType::as_object)
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// [`SchemaBuilder::build()`] refuses to build a schema without one, so
    /// this only returns `None` for a hand-assembled, inconsistent schema.
    pub fn query_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Query)
            .and_then(GraphQLType::as_object)
    }

    /// The root type that operations of `kind` start selecting from.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        let type_name = match kind {
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }?;
        self.types.get(type_name)
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.root_operation_type(OperationKind::Subscription)
            .and_then(GraphQLType::as_object)
    }
}
