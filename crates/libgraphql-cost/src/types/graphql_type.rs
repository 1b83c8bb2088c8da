use crate::loc;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a defined GraphQL type
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub(crate) fn builtin(name: &str) -> Option<Self> {
        match name {
            "Boolean" => Some(Self::Bool),
            "Float" => Some(Self::Float),
            "ID" => Some(Self::ID),
            "Int" => Some(Self::Int),
            "String" => Some(Self::String),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(obj_type) = self {
            Some(obj_type)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(union_type) = self {
            Some(union_type)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> loc::DefLocation {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String =>
                loc::DefLocation::BuiltIn,
            GraphQLType::Enum(t) => t.def_location().clone(),
            GraphQLType::InputObject(t) => t.def_location().clone(),
            GraphQLType::Interface(t) => t.def_location().clone(),
            GraphQLType::Object(t) => t.def_location().clone(),
            GraphQLType::Scalar(t) => t.def_location().clone(),
            GraphQLType::Union(t) => t.def_location().clone(),
        }
    }

    /// Looks up a field on an object or interface type. Every other kind of
    /// type has no fields.
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        match self {
            GraphQLType::Interface(t) => t.field(field_name),
            GraphQLType::Object(t) => t.field(field_name),
            _ => None,
        }
    }

    /// Object, interface, and union types are the types that carry a
    /// selection set.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            GraphQLType::Interface(_)
                | GraphQLType::Object(_)
                | GraphQLType::Union(_),
        )
    }

    pub fn is_object(&self) -> bool {
        matches!(self, GraphQLType::Object(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            GraphQLType::Enum(_) => "Enum",
            GraphQLType::InputObject(_) => "InputObject",
            GraphQLType::Interface(_) => "Interface",
            GraphQLType::Object(_) => "Object",
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String => "Scalar",
            GraphQLType::Union(_) => "Union",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Float => "Float",
            GraphQLType::ID => "ID",
            GraphQLType::Int => "Int",
            GraphQLType::String => "String",
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::InputObject(t) => t.name(),
            GraphQLType::Interface(t) => t.name(),
            GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::Union(t) => t.name(),
        }
    }
}
