use std::collections::HashMap;
use std::sync::OnceLock;

fn empty_variable_bindings() -> &'static VariableBindings {
    static EMPTY_VARIABLE_BINDINGS: OnceLock<VariableBindings> = OnceLock::new();
    EMPTY_VARIABLE_BINDINGS.get_or_init(VariableBindings::new)
}

/// Integer values supplied for an operation's variables.
///
/// Only integers matter for estimation (they are the only values a
/// pagination argument can take), so a variable bound to anything else is
/// simply absent here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableBindings {
    values: HashMap<String, i64>,
}

impl VariableBindings {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn empty() -> &'static VariableBindings {
        empty_variable_bindings()
    }

    /// Collects the integer-valued members of a JSON `variables` object, as
    /// sent alongside a GraphQL request. Any other JSON value yields no
    /// bindings at all.
    pub fn from_json(variables: &serde_json::Value) -> Self {
        let Some(members) = variables.as_object() else {
            return Self::new();
        };

        members.iter()
            .filter_map(|(name, value)| match value.as_i64() {
                Some(int_value) => Some((name.to_owned(), int_value)),
                None => {
                    log::trace!(
                        "Ignoring non-integer value bound to variable `${name}`."
                    );
                    None
                },
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: i64) -> Option<i64> {
        self.values.insert(name.into(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<S: Into<String>> std::iter::FromIterator<(S, i64)> for VariableBindings {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}
