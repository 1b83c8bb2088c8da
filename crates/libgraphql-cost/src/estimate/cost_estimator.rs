use crate::estimate::TypeCostTable;
use crate::estimate::selection_walker::FieldScorer;
use crate::estimate::selection_walker::FieldVisit;

/// Divisor that turns accumulated cost units into reported cost points.
pub const COST_SCALE: u64 = 100;

/// Accumulates the weighted cost of a walk.
///
/// Only fields with a resolvable page size cost anything. Such a field adds
/// the multiplier it's selected under, plus `weight * page_size * multiplier`
/// when its named return type resolves and carries a positive weight in the
/// [`TypeCostTable`]. A field its (known) enclosing type doesn't define costs
/// nothing.
pub(crate) struct CostEstimator<'a> {
    total: u64,
    type_costs: &'a TypeCostTable,
}
impl<'a> CostEstimator<'a> {
    pub fn new(type_costs: &'a TypeCostTable) -> Self {
        Self {
            total: 0,
            type_costs,
        }
    }

    /// Accumulated cost units, before scaling by [`COST_SCALE`].
    pub fn total(&self) -> u64 {
        self.total
    }
}
impl FieldScorer for CostEstimator<'_> {
    fn score_field(&mut self, visit: &FieldVisit<'_>) {
        let Some(page_size) = visit.page_size else {
            return;
        };
        if visit.undefined_on_parent {
            return;
        }

        let mut field_cost = visit.multiplier;
        let weight = visit.return_type
            .map_or(0, |return_type| self.type_costs.weight(return_type.name()));
        if weight > 0 {
            field_cost = field_cost.saturating_add(
                weight.saturating_mul(page_size).saturating_mul(visit.multiplier),
            );
        }

        log::trace!("Field `{}` costs {field_cost} units.", visit.field.name);
        self.total = self.total.saturating_add(field_cost);
    }
}
