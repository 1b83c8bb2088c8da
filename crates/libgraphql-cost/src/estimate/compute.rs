use crate::estimate::QueryCostError;
use crate::estimate::QueryMetrics;
use crate::estimate::QueryMetricsEstimator;
use crate::estimate::TypeCostTable;
use crate::operation::VariableBindings;
use crate::schema::Schema;

fn estimator<'a>(
    schema: &'a Schema,
    variables: Option<&'a VariableBindings>,
    type_costs: Option<&'a TypeCostTable>,
) -> QueryMetricsEstimator<'a> {
    let mut estimator = QueryMetricsEstimator::new(schema);
    if let Some(variables) = variables {
        estimator = estimator.with_variables(variables);
    }
    if let Some(type_costs) = type_costs {
        estimator = estimator.with_type_costs(type_costs);
    }
    estimator
}

/// Weighted cost of `query_src`, in points.
///
/// Shorthand for [`QueryMetricsEstimator::cost()`] with default settings.
pub fn compute_cost(
    schema: &Schema,
    query_src: &str,
    variables: Option<&VariableBindings>,
    type_costs: Option<&TypeCostTable>,
) -> Result<u64, QueryCostError> {
    estimator(schema, variables, type_costs).cost(query_src)
}

/// Worst-case number of objects `query_src` could materialize.
pub fn compute_max_node(
    schema: &Schema,
    query_src: &str,
    variables: Option<&VariableBindings>,
) -> Result<u64, QueryCostError> {
    estimator(schema, variables, None).max_node(query_src)
}

pub fn compute_query_metrics(
    schema: &Schema,
    query_src: &str,
    variables: Option<&VariableBindings>,
    type_costs: Option<&TypeCostTable>,
) -> Result<QueryMetrics, QueryCostError> {
    estimator(schema, variables, type_costs).estimate_str(query_src)
}
