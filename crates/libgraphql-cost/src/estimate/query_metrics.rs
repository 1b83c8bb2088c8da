use serde::Deserialize;
use serde::Serialize;

/// The two scores computed for a query.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMetrics {
    /// Weighted cost, in points.
    pub cost: u64,

    /// Worst-case number of objects the query could materialize.
    pub max_node: u64,
}
