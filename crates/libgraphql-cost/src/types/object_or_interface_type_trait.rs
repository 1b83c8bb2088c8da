use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

pub(super) trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::DefLocation;
    fn field(&self, field_name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
