use crate::ast;
use crate::estimate::QueryCostError;
use crate::estimate::QueryMetrics;
use crate::estimate::TypeCostTable;
use crate::estimate::cost_estimator::COST_SCALE;
use crate::estimate::cost_estimator::CostEstimator;
use crate::estimate::max_node_estimator::MaxNodeEstimator;
use crate::estimate::selection_walker::SelectionWalker;
use crate::operation::VariableBindings;
use crate::operation::DEFAULT_MAX_EXPANDED_SELECTIONS;
use crate::operation::FragmentInliner;
use crate::schema::Schema;

type Result<T> = std::result::Result<T, QueryCostError>;

/// Selection sets may nest this deep before estimation gives up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Computes [`QueryMetrics`] for query documents against one [`Schema`].
///
/// ```
/// # use libgraphql_cost::QueryMetricsEstimator;
/// # use libgraphql_cost::schema::SchemaBuilder;
/// # use libgraphql_cost::VariableBindings;
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::from_str(None, "
///     type Query { users(first: Int): UserConnection }
///     type UserConnection { edges: [UserEdge] }
///     type UserEdge { node: User }
///     type User { name: String }
/// ")?.build()?;
///
/// let variables = VariableBindings::from_iter([("count", 25)]);
/// let metrics = QueryMetricsEstimator::new(&schema)
///     .with_variables(&variables)
///     .estimate_str("
///         query Users($count: Int) {
///           users(first: $count) { edges { node { name } } }
///         }
///     ")?;
///
/// assert_eq!(metrics.max_node, 25);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct QueryMetricsEstimator<'a> {
    max_depth: usize,
    max_expanded_selections: usize,
    operation_name: Option<&'a str>,
    schema: &'a Schema,
    type_costs: &'a TypeCostTable,
    variables: &'a VariableBindings,
}
impl<'a> QueryMetricsEstimator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_expanded_selections: DEFAULT_MAX_EXPANDED_SELECTIONS,
            operation_name: None,
            schema,
            type_costs: TypeCostTable::empty(),
            variables: VariableBindings::empty(),
        }
    }

    /// Weighted cost of every selected operation in `query_src`, in points.
    pub fn cost(&self, query_src: &str) -> Result<u64> {
        let document = self.parse_and_inline(query_src)?;
        self.cost_of_inlined(&document)
    }

    /// Scores an already-parsed document. Fragment spreads are inlined first,
    /// so `document` may use them freely.
    pub fn estimate_document(
        &self,
        document: &ast::operation::Document,
    ) -> Result<QueryMetrics> {
        let document = self.inline(document)?;
        Ok(QueryMetrics {
            cost: self.cost_of_inlined(&document)?,
            max_node: self.max_node_of_inlined(&document)?,
        })
    }

    pub fn estimate_str(&self, query_src: &str) -> Result<QueryMetrics> {
        self.estimate_document(&parse_query(query_src)?)
    }

    /// Worst-case object count of every selected operation in `query_src`.
    pub fn max_node(&self, query_src: &str) -> Result<u64> {
        let document = self.parse_and_inline(query_src)?;
        self.max_node_of_inlined(&document)
    }

    /// Deeper nesting fails with [`QueryCostError::NestingTooDeep`].
    /// Defaults to [`DEFAULT_MAX_DEPTH`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Fragment inlining that would produce more selections than this fails
    /// with [`QueryCostError::TooManySelections`]. Defaults to
    /// [`DEFAULT_MAX_EXPANDED_SELECTIONS`].
    pub fn with_max_expanded_selections(mut self, max_expanded_selections: usize) -> Self {
        self.max_expanded_selections = max_expanded_selections;
        self
    }

    /// Scores only the operation named `operation_name` rather than every
    /// operation in the document.
    pub fn with_operation_name(mut self, operation_name: &'a str) -> Self {
        self.operation_name = Some(operation_name);
        self
    }

    pub fn with_type_costs(mut self, type_costs: &'a TypeCostTable) -> Self {
        self.type_costs = type_costs;
        self
    }

    pub fn with_variables(mut self, variables: &'a VariableBindings) -> Self {
        self.variables = variables;
        self
    }

    fn cost_of_inlined(&self, document: &ast::operation::Document) -> Result<u64> {
        let walker = SelectionWalker::new(self.schema, self.variables, self.max_depth);
        let mut estimator = CostEstimator::new(self.type_costs);
        for op_def in self.selected_operations(document)? {
            walker.walk_operation(op_def, &mut estimator)?;
        }
        Ok(estimator.total() / COST_SCALE)
    }

    fn inline(
        &self,
        document: &ast::operation::Document,
    ) -> Result<ast::operation::Document> {
        let inliner = FragmentInliner::from_document(document)
            .with_max_expanded_selections(self.max_expanded_selections);
        Ok(inliner.inline_document(document)?)
    }

    fn max_node_of_inlined(&self, document: &ast::operation::Document) -> Result<u64> {
        let walker = SelectionWalker::new(self.schema, self.variables, self.max_depth);
        let mut estimator = MaxNodeEstimator::new();
        for op_def in self.selected_operations(document)? {
            walker.walk_operation(op_def, &mut estimator)?;
        }
        Ok(estimator.total())
    }

    fn parse_and_inline(&self, query_src: &str) -> Result<ast::operation::Document> {
        self.inline(&parse_query(query_src)?)
    }

    fn selected_operations<'doc>(
        &self,
        document: &'doc ast::operation::Document,
    ) -> Result<Vec<&'doc ast::operation::OperationDefinition>> {
        let operations = document.definitions.iter().filter_map(|def| match def {
            ast::operation::Definition::Operation(op_def) => Some(op_def),
            ast::operation::Definition::Fragment(_) => None,
        });

        let Some(operation_name) = self.operation_name else {
            return Ok(operations.collect());
        };

        let named: Vec<_> = operations
            .filter(|op_def| operation_name_of(op_def) == Some(operation_name))
            .collect();
        if named.is_empty() {
            return Err(QueryCostError::UnknownOperation {
                operation_name: operation_name.to_string(),
            });
        }
        Ok(named)
    }
}

fn operation_name_of(op_def: &ast::operation::OperationDefinition) -> Option<&str> {
    use ast::operation::OperationDefinition;
    match op_def {
        OperationDefinition::Mutation(mutation) => mutation.name.as_deref(),
        OperationDefinition::Query(query) => query.name.as_deref(),
        OperationDefinition::SelectionSet(_) => None,
        OperationDefinition::Subscription(subscription) => subscription.name.as_deref(),
    }
}

fn parse_query(query_src: &str) -> Result<ast::operation::Document> {
    ast::operation::parse(query_src)
        .map_err(|err| QueryCostError::ParseError {
            err: err.to_string(),
        })
}
