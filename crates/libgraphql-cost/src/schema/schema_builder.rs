use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// Utility for building a [`Schema`] from one or more SDL sources.
///
/// Type extensions are collected as they are loaded and only applied in
/// [`SchemaBuilder::build()`], so an `extend type` may be loaded before the
/// definition it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types: HashMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.extensions) {
            self.apply_type_extension(file_path.as_deref(), ext)?;
        }

        let query_type =
            self.resolve_root_operation_type(OperationKind::Query)?
                .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            self.resolve_root_operation_type(OperationKind::Mutation)?;
        let subscription_type =
            self.resolve_root_operation_type(OperationKind::Subscription)?;

        Ok(Schema {
            query_type,
            mutation_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn from_files<P: AsRef<Path>>(file_paths: &[P]) -> Result<Self> {
        Self::new().load_files(file_paths)
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn new() -> Self {
        let types =
            BUILTIN_SCALAR_NAMES.iter()
                .filter_map(|name| {
                    GraphQLType::builtin(name).map(|t| (name.to_string(), t))
                })
                .collect();

        Self {
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types,
        }
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(&[file_path])
    }

    pub fn load_files<P: AsRef<Path>>(mut self, file_paths: &[P]) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(Some(file_path), file_content)?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let ast_doc =
            ast::schema::parse(content.as_ref())
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.map(Path::to_path_buf),
                    err: err.to_string(),
                })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path, def)?;
        }

        Ok(self)
    }

    fn apply_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, ext_pos) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.clone(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.clone(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.clone(), ext.position),
            TypeExtension::Object(ext) => (ext.name.clone(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.clone(), ext.position),
            TypeExtension::Union(ext) => (ext.name.clone(), ext.position),
        };
        let extension_loc: loc::DefLocation =
            loc::FilePosition::from_pos(file_path, ext_pos).into();

        let Some(existing_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_type_loc: extension_loc,
            });
        };

        match (existing_type, ext) {
            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                add_fields(
                    file_path,
                    &mut obj_type.0.fields,
                    type_name.as_str(),
                    &ext.fields,
                )?;
                obj_type.0.interfaces.extend(ext.implements_interfaces);
            },

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) =>
                add_fields(
                    file_path,
                    &mut iface_type.0.fields,
                    type_name.as_str(),
                    &ext.fields,
                )?,

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                union_type.members.extend(ext.types),

            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                enum_type.values.extend(
                    ext.values.into_iter().map(|value| value.name),
                ),

            // Nothing about these extensions affects estimation; they only
            // need to target a type of the matching kind.
            (GraphQLType::InputObject(_), TypeExtension::InputObject(_))
                | (GraphQLType::Scalar(_)
                    | GraphQLType::Bool
                    | GraphQLType::Float
                    | GraphQLType::ID
                    | GraphQLType::Int
                    | GraphQLType::String, TypeExtension::Scalar(_)) => (),

            (existing_type, _) =>
                return Err(SchemaBuildError::InvalidExtensionType {
                    type_name,
                    existing_type_kind: existing_type.kind_name(),
                    extension_loc,
                }),
        }

        Ok(())
    }

    fn resolve_root_operation_type(
        &mut self,
        operation: OperationKind,
    ) -> Result<Option<String>> {
        let explicit_def = match operation {
            OperationKind::Query => self.query_type.take(),
            OperationKind::Mutation => self.mutation_type.take(),
            OperationKind::Subscription => self.subscription_type.take(),
        };

        let Some(explicit_def) = explicit_def else {
            // Without a `schema { ... }` binding, GraphQL falls back to an
            // object type named after the operation (if there is one).
            let default_name = operation.default_root_type_name();
            return Ok(match self.types.get(default_name) {
                Some(GraphQLType::Object(_)) => Some(default_name.to_string()),
                _ => None,
            });
        };

        match self.types.get(explicit_def.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(explicit_def.type_name)),
            Some(non_obj_type) => Err(SchemaBuildError::RootOperationTypeNotAnObject {
                operation,
                type_kind: non_obj_type.kind_name(),
                type_name: explicit_def.type_name,
            }),
            None => Err(SchemaBuildError::UndefinedRootOperationType {
                operation,
                root_def: explicit_def,
            }),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.extensions.push((file_path.map(Path::to_path_buf), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) => {
                log::trace!(
                    "Ignoring definition of directive `@{}`.",
                    directive_def.name,
                );
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let bindings = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];

        for (operation, type_name) in bindings {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation {
                def_location: loc::FilePosition::from_pos(
                    file_path,
                    schema_def.position,
                ).into(),
                type_name,
            };
            let slot = match operation {
                OperationKind::Query => &mut self.query_type,
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;

        let (type_name, def_pos) = match &type_def {
            TypeDefinition::Enum(def) => (def.name.clone(), def.position),
            TypeDefinition::InputObject(def) => (def.name.clone(), def.position),
            TypeDefinition::Interface(def) => (def.name.clone(), def.position),
            TypeDefinition::Object(def) => (def.name.clone(), def.position),
            TypeDefinition::Scalar(def) => (def.name.clone(), def.position),
            TypeDefinition::Union(def) => (def.name.clone(), def.position),
        };
        let def_location: loc::DefLocation =
            loc::FilePosition::from_pos(file_path, def_pos).into();

        // SDL dumped from introspection often re-declares the built-in
        // scalars.
        if matches!(type_def, TypeDefinition::Scalar(_))
            && BUILTIN_SCALAR_NAMES.contains(&type_name.as_str()) {
            log::trace!("Skipping redeclaration of built-in scalar `{type_name}`.");
            return Ok(());
        }

        if let Some(existing_type) = self.types.get(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                def1: existing_type.def_location(),
                def2: def_location,
            });
        }

        let graphql_type = match type_def {
            TypeDefinition::Enum(def) => GraphQLType::Enum(EnumType {
                def_location,
                name: type_name.clone(),
                values: def.values.into_iter().map(|value| value.name).collect(),
            }),

            TypeDefinition::InputObject(_) => GraphQLType::InputObject(InputObjectType {
                def_location,
                name: type_name.clone(),
            }),

            TypeDefinition::Interface(def) => {
                let mut fields = IndexMap::new();
                add_fields(file_path, &mut fields, type_name.as_str(), &def.fields)?;
                GraphQLType::Interface(InterfaceType(ObjectOrInterfaceTypeData {
                    def_location,
                    fields,
                    interfaces: def.implements_interfaces,
                    name: type_name.clone(),
                }))
            },

            TypeDefinition::Object(def) => {
                let mut fields = IndexMap::new();
                add_fields(file_path, &mut fields, type_name.as_str(), &def.fields)?;
                GraphQLType::Object(ObjectType(ObjectOrInterfaceTypeData {
                    def_location,
                    fields,
                    interfaces: def.implements_interfaces,
                    name: type_name.clone(),
                }))
            },

            TypeDefinition::Scalar(_) => GraphQLType::Scalar(ScalarType {
                def_location,
                name: type_name.clone(),
            }),

            TypeDefinition::Union(def) => GraphQLType::Union(UnionType {
                def_location,
                members: def.types,
                name: type_name.clone(),
            }),
        };

        self.types.insert(type_name, graphql_type);
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn add_fields(
    file_path: Option<&Path>,
    fields: &mut IndexMap<String, Field>,
    type_name: &str,
    ast_fields: &[ast::schema::Field],
) -> Result<()> {
    for ast_field in ast_fields {
        let field_loc: loc::DefLocation =
            loc::FilePosition::from_pos(file_path, ast_field.position).into();

        if let Some(existing_field) = fields.get(ast_field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                type_name: type_name.to_string(),
                field_name: ast_field.name.to_string(),
                field_def1: existing_field.def_location.clone(),
                field_def2: field_loc,
            });
        }

        fields.insert(ast_field.name.to_string(), Field {
            type_annotation: TypeAnnotation::from_ast_type(
                &field_loc,
                &ast_field.field_type,
            ),
            def_location: field_loc,
            name: ast_field.name.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` type")]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::DefLocation,
        field_def2: loc::DefLocation,
    },

    #[error("Multiple `schema` bindings were defined for the {operation} operation")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::DefLocation,
        def2: loc::DefLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::DefLocation,
    },

    #[error(
        "Attempted to extend the {existing_type_kind} type `{type_name}` with \
        an extension of a different kind"
    )]
    InvalidExtensionType {
        type_name: String,
        existing_type_kind: &'static str,
        extension_loc: loc::DefLocation,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema string: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error(
        "The {operation} root operation type is bound to `{type_name}`, which \
        is a {type_kind} type rather than an object type"
    )]
    RootOperationTypeNotAnObject {
        operation: OperationKind,
        type_kind: &'static str,
        type_name: String,
    },

    #[error("Failure while trying to read a schema file from disk")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "The {operation} root operation type is bound to `{}`, which is not \
        defined",
        .root_def.type_name,
    )]
    UndefinedRootOperationType {
        operation: OperationKind,
        root_def: NamedTypeDefLocation,
    },
}

/// Represents the location of a `schema { ... }` root operation binding.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::DefLocation,
    pub type_name: String,
}
