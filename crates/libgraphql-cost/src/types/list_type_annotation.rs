use crate::loc;
use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(super) def_location: loc::DefLocation,
    pub(super) inner_type: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn def_location(&self) -> &loc::DefLocation {
        &self.def_location
    }

    pub fn inner_type(&self) -> &TypeAnnotation {
        &self.inner_type
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        format!(
            "[{}]{}",
            self.inner_type.to_graphql_string(),
            if self.nullable { "" } else { "!" },
        )
    }
}
