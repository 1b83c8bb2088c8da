use crate::ast;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// One enclosing node on the path from an operation down to some point in
/// its selection set.
#[derive(Clone, Copy, Debug)]
pub enum Ancestor<'doc> {
    Field(&'doc ast::operation::Field),
    InlineFragment(&'doc ast::operation::InlineFragment),
    Operation(OperationKind),
}

/// Computes the type that encloses the position reached by walking
/// `ancestors` outermost-first.
///
/// An [`Ancestor::Operation`] seeds the type with the schema's root type for
/// that kind of operation. Each [`Ancestor::Field`] then advances to the
/// named return type of that field on the current type. A field the current
/// type doesn't define leaves the type indeterminate (`None`) for everything
/// below it. An [`Ancestor::InlineFragment`] with a type condition naming a
/// known object, interface, or union type narrows a resolved type to that
/// type.
pub fn enclosing_type<'schema>(
    schema: &'schema Schema,
    ancestors: &[Ancestor<'_>],
) -> Option<&'schema GraphQLType> {
    ancestors.iter().fold(None, |current, ancestor| step(schema, current, ancestor))
}

fn step<'schema>(
    schema: &'schema Schema,
    current: Option<&'schema GraphQLType>,
    ancestor: &Ancestor<'_>,
) -> Option<&'schema GraphQLType> {
    match ancestor {
        Ancestor::Operation(kind) => {
            let root_type = schema.root_operation_type(*kind);
            if root_type.is_none() {
                log::debug!("Schema defines no root type for {kind} operations.");
            }
            root_type
        },

        Ancestor::Field(field) => {
            let current = current?;
            let Some(field_def) = current.field(field.name.as_str()) else {
                log::debug!(
                    "Type `{}` has no field named `{}`; the fields selected \
                    below it can't be typed.",
                    current.name(),
                    field.name,
                );
                return None;
            };
            field_def.named_return_type(schema)
        },

        Ancestor::InlineFragment(inline_frag) => {
            let current = current?;
            match &inline_frag.type_condition {
                Some(ast::operation::TypeCondition::On(type_name)) =>
                    schema.lookup_type(type_name.as_str())
                        .filter(|cond_type| cond_type.is_composite())
                        .or(Some(current)),
                None => Some(current),
            }
        },
    }
}

/// An incrementally maintained [`enclosing_type()`].
///
/// Walkers push one entry as they descend into a selection set and pop it as
/// they leave, so each lookup is O(1) rather than a re-walk of the whole
/// ancestor chain.
#[derive(Debug)]
pub(crate) struct TypeContext<'schema> {
    schema: &'schema Schema,
    stack: Vec<Option<&'schema GraphQLType>>,
}
impl<'schema> TypeContext<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            schema,
            stack: vec![],
        }
    }

    pub fn current(&self) -> Option<&'schema GraphQLType> {
        self.stack.last().copied().flatten()
    }

    pub fn enter(&mut self, ancestor: &Ancestor<'_>) {
        let next = step(self.schema, self.current(), ancestor);
        self.stack.push(next);
    }

    pub fn leave(&mut self) {
        self.stack.pop();
    }
}
