use crate::ast;

/// The kind of a GraphQL operation, which decides the root type its
/// selection set starts from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The root type name GraphQL falls back to when a schema has no explicit
    /// `schema { ... }` binding for this kind of operation.
    pub fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }

    /// The shorthand `{ ... }` form of an operation is a query.
    pub fn from_ast(op_def: &ast::operation::OperationDefinition) -> Self {
        use ast::operation::OperationDefinition;
        match op_def {
            OperationDefinition::Mutation(_) => Self::Mutation,
            OperationDefinition::Query(_)
                | OperationDefinition::SelectionSet(_) => Self::Query,
            OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        })
    }
}
