use crate::loc;

/// A custom scalar. The built-in scalars are separate
/// [`GraphQLType`](crate::types::GraphQLType) variants.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::DefLocation,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::DefLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
