use crate::ast;
use crate::operation::VariableBindings;

/// Argument names that bound how many items a connection field returns.
pub const PAGINATION_ARGUMENT_NAMES: [&str; 2] = ["first", "last"];

/// Resolves the effective page size of a field from its arguments.
///
/// The leftmost `first` or `last` argument decides; when a field declares
/// both, whichever comes first in the argument list wins. Its value resolves
/// as follows:
///
/// * An integer literal is the page size.
/// * A variable is looked up in `variables`. An unbound variable yields
///   `None`, leaving the multiplier for that subtree untouched.
/// * Every other kind of value (float, enum, string, ...) yields `None`.
///
/// Negative integers can't describe a page, so they also yield `None`.
pub fn resolve_page_size(
    arguments: &[ast::Argument],
    variables: &VariableBindings,
) -> Option<u64> {
    let (arg_name, arg_value) =
        arguments.iter()
            .find(|(name, _)| PAGINATION_ARGUMENT_NAMES.contains(&name.as_str()))?;

    let page_size = match arg_value {
        ast::Value::Int(number) => number.as_i64(),

        ast::Value::Variable(var_name) => {
            let bound_value = variables.get(var_name.as_str());
            if bound_value.is_none() {
                log::debug!(
                    "Pagination argument `{arg_name}` references unbound \
                    variable `${var_name}`; treating it as absent."
                );
            }
            bound_value
        },

        _ => None,
    }?;

    u64::try_from(page_size).ok()
}
