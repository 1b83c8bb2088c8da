use smallvec::SmallVec;

/// Cumulative pagination multipliers from the operation root down to the
/// current selection set.
///
/// The stack is never empty: it starts out as `[1]` and every
/// [`push_for()`](MultiplierStack::push_for) is matched by exactly one
/// [`pop()`](MultiplierStack::pop) when the walk leaves that selection set.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MultiplierStack {
    multipliers: SmallVec<[u64; 16]>,
}
impl MultiplierStack {
    pub fn new() -> Self {
        let mut multipliers = SmallVec::new();
        multipliers.push(1);
        Self { multipliers }
    }

    pub fn depth(&self) -> usize {
        self.multipliers.len() - 1
    }

    pub fn pop(&mut self) {
        debug_assert!(
            self.multipliers.len() > 1,
            "Popped the base multiplier of a MultiplierStack",
        );
        if self.multipliers.len() > 1 {
            self.multipliers.pop();
        }
    }

    /// Enters a selection set. With a page size, the new top is the current
    /// top scaled by that size; without one, the current top carries over.
    pub fn push_for(&mut self, page_size: Option<u64>) {
        let top = self.top();
        self.multipliers.push(match page_size {
            Some(page_size) => top.saturating_mul(page_size),
            None => top,
        });
    }

    pub fn top(&self) -> u64 {
        self.multipliers.last().copied().unwrap_or(1)
    }
}
impl std::default::Default for MultiplierStack {
    fn default() -> Self {
        Self::new()
    }
}
