use crate::operation::CyclicFragmentError;
use crate::operation::FragmentInlineError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum QueryCostError {
    #[error("{0}")]
    CyclicFragment(#[from] CyclicFragmentError),

    #[error(
        "Selections are nested more than {max_depth} selection sets deep"
    )]
    NestingTooDeep {
        max_depth: usize,
    },

    #[error("Failed to parse query document: {err}")]
    ParseError {
        err: String,
    },

    #[error(
        "Inlining fragment spreads produces more than {max_selections} selections"
    )]
    TooManySelections {
        max_selections: usize,
    },

    #[error("The document defines no operation named `{operation_name}`")]
    UnknownOperation {
        operation_name: String,
    },
}
impl From<FragmentInlineError> for QueryCostError {
    fn from(err: FragmentInlineError) -> Self {
        match err {
            FragmentInlineError::CyclicFragment(err) => Self::CyclicFragment(err),
            FragmentInlineError::TooManySelections { max_selections } =>
                Self::TooManySelections { max_selections },
        }
    }
}
