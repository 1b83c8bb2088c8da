use crate::estimate::selection_walker::FieldScorer;
use crate::estimate::selection_walker::FieldVisit;

/// Counts the object instances a walk could materialize in the worst case.
pub(crate) struct MaxNodeEstimator {
    total: u64,
}
impl MaxNodeEstimator {
    pub fn new() -> Self {
        Self { total: 0 }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// `edges` directly under a paginated field, and `node` directly under
    /// `edges`, repeat objects their connection field already counted.
    fn is_connection_wrapper(visit: &FieldVisit<'_>) -> bool {
        let Some(parent) = visit.parent else {
            return false;
        };
        match visit.field.name.as_str() {
            "edges" => parent.page_size.is_some(),
            "node" => parent.field.name == "edges",
            _ => false,
        }
    }
}
impl FieldScorer for MaxNodeEstimator {
    fn score_field(&mut self, visit: &FieldVisit<'_>) {
        if !visit.return_type.is_some_and(|return_type| return_type.is_object()) {
            return;
        }

        let node_count = match visit.page_size {
            Some(page_size) => page_size.saturating_mul(visit.multiplier),
            None if Self::is_connection_wrapper(visit) => 0,
            None => visit.multiplier,
        };

        log::trace!("Field `{}` adds {node_count} nodes.", visit.field.name);
        self.total = self.total.saturating_add(node_count);
    }
}
