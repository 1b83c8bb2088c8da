use crate::ast;
use std::collections::HashMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, FragmentInlineError>;

/// Inlining stops with [`FragmentInlineError::TooManySelections`] once the
/// rewritten document would hold more selections than this.
pub const DEFAULT_MAX_EXPANDED_SELECTIONS: usize = 100_000;

/// Rewrites a document so that every resolvable fragment spread is replaced
/// by an equivalent inline fragment.
///
/// For a spread `...Name @dirs` of `fragment Name on T { body }`, the
/// replacement is `... on T @dirs { body' }` where `body'` has had its own
/// spreads inlined recursively. Spreads naming a fragment that isn't defined
/// in the document are left untouched.
///
/// Fragment definitions are kept in the output (with their own spreads
/// inlined as well), so inlining an already-inlined document is a no-op.
///
/// Fragments that spread other fragments more than once grow the document
/// exponentially without ever forming a cycle, so the number of selections
/// written to the output is capped (see
/// [`with_max_expanded_selections()`](Self::with_max_expanded_selections)).
pub struct FragmentInliner<'doc> {
    fragments: HashMap<&'doc str, &'doc ast::operation::FragmentDefinition>,
    max_expanded_selections: usize,
}
impl<'doc> FragmentInliner<'doc> {
    pub fn from_document(document: &'doc ast::operation::Document) -> Self {
        let mut fragments = HashMap::new();
        for def in document.definitions.iter() {
            if let ast::operation::Definition::Fragment(frag_def) = def {
                if fragments.contains_key(frag_def.name.as_str()) {
                    log::debug!(
                        "Fragment `{}` is defined more than once; inlining the \
                        first definition.",
                        frag_def.name,
                    );
                    continue;
                }
                fragments.insert(frag_def.name.as_str(), frag_def);
            }
        }
        Self {
            fragments,
            max_expanded_selections: DEFAULT_MAX_EXPANDED_SELECTIONS,
        }
    }

    /// Defaults to [`DEFAULT_MAX_EXPANDED_SELECTIONS`].
    pub fn with_max_expanded_selections(mut self, max_expanded_selections: usize) -> Self {
        self.max_expanded_selections = max_expanded_selections;
        self
    }

    pub fn fragment_names(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().copied()
    }

    pub fn inline_document(
        &self,
        document: &ast::operation::Document,
    ) -> Result<ast::operation::Document> {
        use ast::operation::Definition;
        use ast::operation::OperationDefinition;

        let mut state = InlineState {
            path: vec![],
            selection_count: 0,
        };
        let mut definitions = Vec::with_capacity(document.definitions.len());
        for def in document.definitions.iter() {
            definitions.push(match def {
                Definition::Fragment(frag_def) => {
                    state.path.push(frag_def.name.to_owned());
                    let selection_set =
                        self.inline_selection_set(&frag_def.selection_set, &mut state)?;
                    state.path.pop();
                    Definition::Fragment(ast::operation::FragmentDefinition {
                        selection_set,
                        ..frag_def.clone()
                    })
                },

                Definition::Operation(op_def) => Definition::Operation(match op_def {
                    OperationDefinition::Mutation(mutation) =>
                        OperationDefinition::Mutation(ast::operation::Mutation {
                            selection_set: self.inline_selection_set(
                                &mutation.selection_set,
                                &mut state,
                            )?,
                            ..mutation.clone()
                        }),

                    OperationDefinition::Query(query) =>
                        OperationDefinition::Query(ast::operation::Query {
                            selection_set: self.inline_selection_set(
                                &query.selection_set,
                                &mut state,
                            )?,
                            ..query.clone()
                        }),

                    OperationDefinition::SelectionSet(selection_set) =>
                        OperationDefinition::SelectionSet(
                            self.inline_selection_set(selection_set, &mut state)?,
                        ),

                    OperationDefinition::Subscription(subscription) =>
                        OperationDefinition::Subscription(
                            ast::operation::Subscription {
                                selection_set: self.inline_selection_set(
                                    &subscription.selection_set,
                                    &mut state,
                                )?,
                                ..subscription.clone()
                            },
                        ),
                }),
            });
        }

        Ok(ast::operation::Document { definitions })
    }

    fn inline_selection_set(
        &self,
        selection_set: &ast::operation::SelectionSet,
        state: &mut InlineState,
    ) -> Result<ast::operation::SelectionSet> {
        use ast::operation::Selection;

        let mut items = Vec::with_capacity(selection_set.items.len());
        for selection in selection_set.items.iter() {
            state.selection_count += 1;
            if state.selection_count > self.max_expanded_selections {
                return Err(FragmentInlineError::TooManySelections {
                    max_selections: self.max_expanded_selections,
                });
            }

            items.push(match selection {
                Selection::Field(field) => Selection::Field(ast::operation::Field {
                    selection_set: self.inline_selection_set(&field.selection_set, state)?,
                    ..field.clone()
                }),

                Selection::InlineFragment(inline_frag) =>
                    Selection::InlineFragment(ast::operation::InlineFragment {
                        selection_set: self.inline_selection_set(
                            &inline_frag.selection_set,
                            state,
                        )?,
                        ..inline_frag.clone()
                    }),

                Selection::FragmentSpread(spread) => match self.fragments.get(
                    spread.fragment_name.as_str(),
                ) {
                    None => {
                        log::debug!(
                            "Leaving spread of undefined fragment `{}` in place.",
                            spread.fragment_name,
                        );
                        selection.clone()
                    },

                    Some(frag_def) => {
                        if let Some(cycle_start) = state.path.iter().position(
                            |name| name == &spread.fragment_name
                        ) {
                            let mut cycle_path = state.path[cycle_start..].to_vec();
                            cycle_path.push(spread.fragment_name.to_owned());
                            return Err(CyclicFragmentError { cycle_path }.into());
                        }

                        state.path.push(spread.fragment_name.to_owned());
                        let inlined_body =
                            self.inline_selection_set(&frag_def.selection_set, state)?;
                        state.path.pop();

                        Selection::InlineFragment(ast::operation::InlineFragment {
                            position: spread.position,
                            type_condition: Some(frag_def.type_condition.clone()),
                            directives: spread.directives.clone(),
                            selection_set: inlined_body,
                        })
                    },
                },
            });
        }

        Ok(ast::operation::SelectionSet {
            span: selection_set.span,
            items,
        })
    }
}

struct InlineState {
    /// Fragments currently being expanded, outermost first. Reaching a
    /// fragment that's already on it means the spreads loop.
    path: Vec<String>,

    /// Selections written to the output so far.
    selection_count: usize,
}

/// Inlines every resolvable fragment spread in `document`.
///
/// See [`FragmentInliner`] for the exact rewrite performed.
pub fn inline_fragments(
    document: &ast::operation::Document,
) -> Result<ast::operation::Document> {
    FragmentInliner::from_document(document).inline_document(document)
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentInlineError {
    #[error("{0}")]
    CyclicFragment(#[from] CyclicFragmentError),

    #[error(
        "Inlining fragment spreads produces more than {max_selections} selections"
    )]
    TooManySelections {
        max_selections: usize,
    },
}

/// Raised when fragment spreads refer to each other in a loop (including a
/// fragment that spreads itself), which would make inlining unbounded.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Cycle detected in fragment spreads: {}", cycle_path.join(" → "))]
pub struct CyclicFragmentError {
    /// The fragments forming the loop, starting and ending with the same name.
    pub cycle_path: Vec<String>,
}
