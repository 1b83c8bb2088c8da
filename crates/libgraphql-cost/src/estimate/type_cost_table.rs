use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

fn empty_type_cost_table() -> &'static TypeCostTable {
    static EMPTY_TYPE_COST_TABLE: OnceLock<TypeCostTable> = OnceLock::new();
    EMPTY_TYPE_COST_TABLE.get_or_init(TypeCostTable::new)
}

/// Per-type weights modelling resolvers that cost more than plain
/// pagination, keyed by type name. Types without an entry weigh 0.
///
/// Deserializes from a plain JSON object such as
/// `{"RepositoryConnection": 10}`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypeCostTable {
    weights: HashMap<String, u64>,
}
impl TypeCostTable {
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    pub fn empty() -> &'static TypeCostTable {
        empty_type_cost_table()
    }

    pub fn insert(&mut self, type_name: impl Into<String>, weight: u64) -> Option<u64> {
        self.weights.insert(type_name.into(), weight)
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weight(&self, type_name: &str) -> u64 {
        self.weights.get(type_name).copied().unwrap_or(0)
    }
}
impl<S: Into<String>> std::iter::FromIterator<(S, u64)> for TypeCostTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter()
                .map(|(type_name, weight)| (type_name.into(), weight))
                .collect(),
        }
    }
}
