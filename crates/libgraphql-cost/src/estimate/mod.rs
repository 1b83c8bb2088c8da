mod compute;
mod cost_estimator;
mod max_node_estimator;
mod multiplier_stack;
mod query_cost_error;
mod query_metrics;
mod query_metrics_estimator;
mod selection_walker;
mod type_context;
mod type_cost_table;

pub use compute::compute_cost;
pub use compute::compute_max_node;
pub use compute::compute_query_metrics;
pub use cost_estimator::COST_SCALE;
pub use query_cost_error::QueryCostError;
pub use query_metrics::QueryMetrics;
pub use query_metrics_estimator::DEFAULT_MAX_DEPTH;
pub use query_metrics_estimator::QueryMetricsEstimator;
pub use type_context::Ancestor;
pub use type_context::enclosing_type;
pub use type_cost_table::TypeCostTable;

#[cfg(test)]
mod tests;
