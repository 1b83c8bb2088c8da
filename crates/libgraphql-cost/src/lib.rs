//! Estimates how expensive a GraphQL query is before it's executed.
//!
//! Two independent scores are computed for a query document against a
//! [`Schema`](schema::Schema):
//!
//! * **cost**: a weighted score driven by the `first`/`last` pagination
//!   arguments of connection fields, optionally weighted further per return
//!   type by a [`TypeCostTable`].
//! * **maxNode**: the worst-case number of objects the query could
//!   materialize if every page came back full.
//!
//! Fragment spreads are inlined before scoring, and pagination arguments may
//! be bound through [`VariableBindings`].

pub mod ast;
mod estimate;
pub mod file_reader;
pub mod loc;
pub mod operation;
pub mod schema;
pub mod types;

pub use estimate::Ancestor;
pub use estimate::COST_SCALE;
pub use estimate::DEFAULT_MAX_DEPTH;
pub use estimate::QueryCostError;
pub use estimate::QueryMetrics;
pub use estimate::QueryMetricsEstimator;
pub use estimate::TypeCostTable;
pub use estimate::compute_cost;
pub use estimate::compute_max_node;
pub use estimate::compute_query_metrics;
pub use estimate::enclosing_type;
pub use operation::CyclicFragmentError;
pub use operation::DEFAULT_MAX_EXPANDED_SELECTIONS;
pub use operation::FragmentInlineError;
pub use operation::VariableBindings;
pub use operation::inline_fragments;
pub use operation::resolve_page_size;

#[cfg(test)]
mod test;
