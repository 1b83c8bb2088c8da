use crate::loc;

/// Input objects only ever appear as argument types, so nothing about their
/// fields matters for estimation.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::DefLocation,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::DefLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
