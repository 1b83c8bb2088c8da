mod fragment_inliner;
mod operation_kind;
mod pagination;
mod variable_bindings;

pub use fragment_inliner::CyclicFragmentError;
pub use fragment_inliner::DEFAULT_MAX_EXPANDED_SELECTIONS;
pub use fragment_inliner::FragmentInlineError;
pub use fragment_inliner::FragmentInliner;
pub use fragment_inliner::inline_fragments;
pub use operation_kind::OperationKind;
pub use pagination::PAGINATION_ARGUMENT_NAMES;
pub use pagination::resolve_page_size;
pub use variable_bindings::VariableBindings;

#[cfg(test)]
mod tests;
