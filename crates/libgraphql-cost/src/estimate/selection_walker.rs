use crate::ast;
use crate::estimate::Ancestor;
use crate::estimate::QueryCostError;
use crate::estimate::multiplier_stack::MultiplierStack;
use crate::estimate::type_context::TypeContext;
use crate::operation::OperationKind;
use crate::operation::VariableBindings;
use crate::operation::resolve_page_size;
use crate::schema::Schema;
use crate::types::GraphQLType;

type Result<T> = std::result::Result<T, QueryCostError>;

/// Everything a [`FieldScorer`] needs to know about one selected field.
#[derive(Debug)]
pub(crate) struct FieldVisit<'a> {
    pub field: &'a ast::operation::Field,

    /// The multiplier in effect where the field is selected (before the
    /// field's own page size applies to its children).
    pub multiplier: u64,

    pub page_size: Option<u64>,

    /// The nearest enclosing field, looking through inline fragments.
    pub parent: Option<ParentField<'a>>,

    /// The field's named return type, when both the enclosing type and the
    /// field's definition on it could be resolved.
    pub return_type: Option<&'a GraphQLType>,

    /// The enclosing type is known but defines no field by this name.
    pub undefined_on_parent: bool,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ParentField<'a> {
    pub field: &'a ast::operation::Field,
    pub page_size: Option<u64>,
}

pub(crate) trait FieldScorer {
    fn score_field(&mut self, visit: &FieldVisit<'_>);
}

/// Depth-first walk over an (inlined) operation's selections.
///
/// The walker owns the bookkeeping both estimators share: one multiplier
/// push per entered selection set, the enclosing type, and the chain of
/// enclosing fields. Scoring itself is left to a [`FieldScorer`].
pub(crate) struct SelectionWalker<'a> {
    max_depth: usize,
    schema: &'a Schema,
    variables: &'a VariableBindings,
}
impl<'a> SelectionWalker<'a> {
    pub fn new(
        schema: &'a Schema,
        variables: &'a VariableBindings,
        max_depth: usize,
    ) -> Self {
        Self {
            max_depth,
            schema,
            variables,
        }
    }

    pub fn walk_operation<S: FieldScorer>(
        &self,
        op_def: &'a ast::operation::OperationDefinition,
        scorer: &mut S,
    ) -> Result<()> {
        let kind = OperationKind::from_ast(op_def);
        let selection_set = match op_def {
            ast::operation::OperationDefinition::Mutation(mutation) =>
                &mutation.selection_set,
            ast::operation::OperationDefinition::Query(query) =>
                &query.selection_set,
            ast::operation::OperationDefinition::SelectionSet(selection_set) =>
                selection_set,
            ast::operation::OperationDefinition::Subscription(subscription) =>
                &subscription.selection_set,
        };

        let mut state = WalkState {
            multipliers: MultiplierStack::new(),
            parents: vec![],
            type_context: TypeContext::new(self.schema),
        };
        state.type_context.enter(&Ancestor::Operation(kind));
        state.multipliers.push_for(None);
        self.walk_selection_set(selection_set, &mut state, scorer)?;
        state.multipliers.pop();
        state.type_context.leave();

        debug_assert_eq!(state.multipliers.depth(), 0);
        Ok(())
    }

    fn walk_selection_set<S: FieldScorer>(
        &self,
        selection_set: &'a ast::operation::SelectionSet,
        state: &mut WalkState<'a>,
        scorer: &mut S,
    ) -> Result<()> {
        if state.multipliers.depth() > self.max_depth {
            return Err(QueryCostError::NestingTooDeep {
                max_depth: self.max_depth,
            });
        }

        for selection in selection_set.items.iter() {
            match selection {
                ast::operation::Selection::Field(field) => {
                    let page_size = resolve_page_size(&field.arguments, self.variables);
                    let parent_type = state.type_context.current();
                    let field_def = parent_type
                        .and_then(|parent_type| parent_type.field(field.name.as_str()));
                    let undefined_on_parent = parent_type.is_some() && field_def.is_none();
                    if let (Some(parent_type), None) = (parent_type, field_def) {
                        log::debug!(
                            "Not scoring `{}`: type `{}` defines no such field.",
                            field.name,
                            parent_type.name(),
                        );
                    }
                    let return_type = field_def
                        .and_then(|field_def| field_def.named_return_type(self.schema));

                    let visit = FieldVisit {
                        field,
                        multiplier: state.multipliers.top(),
                        page_size,
                        parent: state.parents.last().copied(),
                        return_type,
                        undefined_on_parent,
                    };
                    log::trace!(
                        "Visiting field `{}` (multiplier: {}, page size: {:?}, \
                        return type: {:?})",
                        field.name,
                        visit.multiplier,
                        page_size,
                        return_type.map(GraphQLType::name),
                    );
                    scorer.score_field(&visit);

                    if field.selection_set.items.is_empty() {
                        continue;
                    }
                    state.multipliers.push_for(page_size);
                    state.parents.push(ParentField { field, page_size });
                    state.type_context.enter(&Ancestor::Field(field));
                    self.walk_selection_set(&field.selection_set, state, scorer)?;
                    state.type_context.leave();
                    state.parents.pop();
                    state.multipliers.pop();
                },

                ast::operation::Selection::InlineFragment(inline_frag) => {
                    state.multipliers.push_for(None);
                    state.type_context.enter(&Ancestor::InlineFragment(inline_frag));
                    self.walk_selection_set(&inline_frag.selection_set, state, scorer)?;
                    state.type_context.leave();
                    state.multipliers.pop();
                },

                ast::operation::Selection::FragmentSpread(spread) =>
                    log::debug!(
                        "Not scoring unresolved spread of fragment `{}`.",
                        spread.fragment_name,
                    ),
            }
        }

        Ok(())
    }
}

struct WalkState<'a> {
    multipliers: MultiplierStack,
    parents: Vec<ParentField<'a>>,
    type_context: TypeContext<'a>,
}
