use crate::ast;
use crate::ast::NamedNode;
use crate::schema::builtins;
use crate::schema::Schema;
use crate::types::specified_by_url_from_ast;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValueDefinition;
use crate::types::FieldDefinition;
use crate::types::InputObjectType;
use crate::types::InputValueDefinition;
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::SourceLocation;
use crate::SyntaxError;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RootOperation {
    Query,
    Mutation,
    Subscription,
}

/// Utility for building a [`Schema`] from SDL text.
///
/// Extensions may appear before the type they extend (even in a later
/// [`SchemaBuilder::load_str()`] call); they are held back and merged when
/// [`SchemaBuilder::build()`] runs.
#[derive(Debug)]
pub struct SchemaBuilder {
    pub(crate) directives: IndexMap<String, Directive>,
    pub(crate) mutation_type_name: Option<String>,
    pending_extensions: Vec<ast::schema::TypeExtension>,
    pub(crate) query_type_name: Option<String>,
    pub(crate) subscription_type_name: Option<String>,
    pub(crate) types: IndexMap<String, NamedType>,
}

impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for ext in std::mem::take(&mut self.pending_extensions) {
            if !self.types.contains_key(ext.node_name()) {
                return Err(SchemaBuildError::ExtensionOfUndefinedType {
                    type_name: ext.node_name().to_string(),
                    location: extension_position(&ext).into(),
                });
            }
            self.visit_ast_type_extension(ext)?;
        }

        let query_type_name = self.query_type_name.take()
            .or_else(|| self.default_root_type_name("Query"));
        let mutation_type_name = self.mutation_type_name.take()
            .or_else(|| self.default_root_type_name("Mutation"));
        let subscription_type_name = self.subscription_type_name.take()
            .or_else(|| self.default_root_type_name("Subscription"));

        Ok(Schema {
            directives: self.directives,
            mutation_type_name,
            query_type_name,
            subscription_type_name,
            types: self.types,
        })
    }

    /// A builder pre-populated with the built-in scalars, directives and
    /// introspection types.
    pub fn new() -> Self {
        let mut builder = Self {
            directives: IndexMap::new(),
            mutation_type_name: None,
            pending_extensions: vec![],
            query_type_name: None,
            subscription_type_name: None,
            types: IndexMap::new(),
        };
        builder.load_builtins();
        builder
    }

    pub fn load_str(mut self, content: &str) -> Result<Self> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError(
                    SyntaxError::from_parser_error(&err, content),
                ))?
                .into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(def)?;
        }

        Ok(self)
    }

    /// Adds a type that was not built from SDL (and so has no syntax node).
    pub(crate) fn add_named_type(&mut self, named_type: NamedType) -> Result<()> {
        let type_name = named_type.name().to_string();
        if builtins::is_builtin_type_name(&type_name) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinType {
                type_name,
                location: None,
            });
        }
        if self.types.contains_key(&type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                location: None,
            });
        }
        self.types.insert(type_name, named_type);
        Ok(())
    }

    /// Adds a directive that was not built from SDL.
    pub(crate) fn add_directive(&mut self, directive: Directive) -> Result<()> {
        let directive_name = directive.name().to_string();
        if builtins::is_builtin_directive_name(&directive_name) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name,
                location: None,
            });
        }
        if self.directives.contains_key(&directive_name) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name,
                location: None,
            });
        }
        self.directives.insert(directive_name, directive);
        Ok(())
    }

    fn default_root_type_name(&self, type_name: &str) -> Option<String> {
        match self.types.get(type_name) {
            Some(NamedType::Object(_)) => Some(type_name.to_string()),
            _ => None,
        }
    }

    fn load_builtins(&mut self) {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(builtins::BUILTIN_SDL)
                .expect("built-in SDL is well-formed")
                .into_static();

        for def in ast_doc.definitions {
            match def {
                ast::schema::Definition::DirectiveDefinition(def) => {
                    let mut directive = Directive::from_ast(&def);
                    directive.clear_ast_nodes();
                    self.directives.insert(def.name, directive);
                },
                ast::schema::Definition::TypeDefinition(def) => {
                    let mut named_type = named_type_from_ast(&def)
                        .expect("built-in types are well-formed");
                    named_type.clear_ast_nodes();
                    self.types.insert(def.node_name().to_string(), named_type);
                },
                ast::schema::Definition::SchemaDefinition(_)
                | ast::schema::Definition::TypeExtension(_) => (),
            }
        }
    }

    fn visit_ast_def(&mut self, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(type_def),
            Definition::TypeExtension(type_ext) => {
                if self.types.contains_key(type_ext.node_name()) {
                    self.visit_ast_type_extension(type_ext)
                } else {
                    log::trace!(
                        "deferring extension of `{}` until its definition is \
                        loaded",
                        type_ext.node_name(),
                    );
                    self.pending_extensions.push(type_ext);
                    Ok(())
                }
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let location = Some(SourceLocation::from(def.position));

        if builtins::is_builtin_directive_name(def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location,
            });
        }

        if self.directives.contains_key(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name,
                location,
            });
        }

        self.directives.insert(def.name.to_string(), Directive::from_ast(&def));
        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let location = SourceLocation::from(schema_def.position);
        let roots = [
            (RootOperation::Query, schema_def.query, &mut self.query_type_name),
            (RootOperation::Mutation, schema_def.mutation, &mut self.mutation_type_name),
            (RootOperation::Subscription, schema_def.subscription, &mut self.subscription_type_name),
        ];
        for (operation, type_name, slot) in roots {
            let Some(type_name) = type_name else {
                continue;
            };
            if slot.is_some() {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location,
                });
            }
            *slot = Some(type_name);
        }
        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        let type_name = type_def.node_name().to_string();
        let location = Some(definition_position(&type_def).into());

        if builtins::is_builtin_type_name(type_name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinType {
                type_name,
                location,
            });
        }

        if self.types.contains_key(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                location,
            });
        }

        let named_type = named_type_from_ast(&type_def)?;
        self.types.insert(type_name, named_type);
        Ok(())
    }

    /// Folds an extension into the live type it extends, which must already
    /// be loaded.
    fn visit_ast_type_extension(
        &mut self,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let location = SourceLocation::from(extension_position(&ext));
        let type_name = ext.node_name().to_string();
        let Some(named_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                location,
            });
        };

        match (named_type, ext) {
            (NamedType::Enum(enum_type), TypeExtension::Enum(ext)) => {
                for value in &ext.values {
                    insert_enum_value(&mut enum_type.values, &type_name, value)?;
                }
                enum_type.extension_ast_nodes.push(ext);
            },

            (NamedType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) => {
                for field in &ext.fields {
                    insert_input_field(&mut inputobj_type.fields, &type_name, field)?;
                }
                inputobj_type.extension_ast_nodes.push(ext);
            },

            (NamedType::Interface(iface_type), TypeExtension::Interface(ext)) => {
                merge_object_or_interface_data(
                    &mut iface_type.data,
                    &ext.fields,
                    &ext.implements_interfaces,
                    location,
                )?;
                iface_type.extension_ast_nodes.push(ext);
            },

            (NamedType::Object(obj_type), TypeExtension::Object(ext)) => {
                merge_object_or_interface_data(
                    &mut obj_type.data,
                    &ext.fields,
                    &ext.implements_interfaces,
                    location,
                )?;
                obj_type.extension_ast_nodes.push(ext);
            },

            (NamedType::Scalar(scalar_type), TypeExtension::Scalar(ext)) => {
                if let Some(url) = specified_by_url_from_ast(&ext.directives) {
                    scalar_type.specified_by_url = Some(url);
                }
                scalar_type.extension_ast_nodes.push(ext);
            },

            (NamedType::Union(union_type), TypeExtension::Union(ext)) => {
                for member in &ext.types {
                    if union_type.members.contains(member) {
                        return Err(SchemaBuildError::DuplicatedUnionMember {
                            type_name,
                            member_name: member.to_string(),
                            location,
                        });
                    }
                    union_type.members.push(member.to_string());
                }
                union_type.extension_ast_nodes.push(ext);
            },

            (named_type, _) => {
                return Err(SchemaBuildError::InvalidExtensionType {
                    type_name,
                    type_kind: named_type.kind_name(),
                    location,
                });
            },
        }

        Ok(())
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a type definition into its live counterpart, keeping the node.
pub(crate) fn named_type_from_ast(
    def: &ast::schema::TypeDefinition,
) -> Result<NamedType> {
    use ast::schema::TypeDefinition;
    Ok(match def {
        TypeDefinition::Enum(def) => {
            let mut values = IndexMap::new();
            for value in &def.values {
                insert_enum_value(&mut values, &def.name, value)?;
            }
            NamedType::Enum(EnumType {
                ast_node: Some(def.clone()),
                description: def.description.clone(),
                extension_ast_nodes: vec![],
                name: def.name.to_string(),
                values,
            })
        },

        TypeDefinition::InputObject(def) => {
            let mut fields = IndexMap::new();
            for field in &def.fields {
                insert_input_field(&mut fields, &def.name, field)?;
            }
            NamedType::InputObject(InputObjectType {
                ast_node: Some(def.clone()),
                description: def.description.clone(),
                extension_ast_nodes: vec![],
                fields,
                name: def.name.to_string(),
            })
        },

        TypeDefinition::Interface(def) => {
            let mut data = ObjectOrInterfaceTypeData {
                description: def.description.clone(),
                fields: IndexMap::new(),
                interfaces: vec![],
                name: def.name.to_string(),
            };
            merge_object_or_interface_data(
                &mut data,
                &def.fields,
                &def.implements_interfaces,
                def.position.into(),
            )?;
            NamedType::Interface(InterfaceType {
                ast_node: Some(def.clone()),
                data,
                extension_ast_nodes: vec![],
            })
        },

        TypeDefinition::Object(def) => {
            let mut data = ObjectOrInterfaceTypeData {
                description: def.description.clone(),
                fields: IndexMap::new(),
                interfaces: vec![],
                name: def.name.to_string(),
            };
            merge_object_or_interface_data(
                &mut data,
                &def.fields,
                &def.implements_interfaces,
                def.position.into(),
            )?;
            NamedType::Object(ObjectType {
                ast_node: Some(def.clone()),
                data,
                extension_ast_nodes: vec![],
            })
        },

        TypeDefinition::Scalar(def) =>
            NamedType::Scalar(ScalarType::from_ast(def)),

        TypeDefinition::Union(def) => {
            let mut members: Vec<String> = vec![];
            for member in &def.types {
                if members.contains(member) {
                    return Err(SchemaBuildError::DuplicatedUnionMember {
                        type_name: def.name.to_string(),
                        member_name: member.to_string(),
                        location: def.position.into(),
                    });
                }
                members.push(member.to_string());
            }
            let mut union_type = UnionType::from_ast(def);
            union_type.members = members;
            NamedType::Union(union_type)
        },
    })
}

fn merge_object_or_interface_data(
    data: &mut ObjectOrInterfaceTypeData,
    fields: &[ast::schema::Field],
    interfaces: &[String],
    location: SourceLocation,
) -> Result<()> {
    for field in fields {
        if data.fields.contains_key(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                type_name: data.name.to_string(),
                field_name: field.name.to_string(),
                location: Some(field.position.into()),
            });
        }
        data.fields.insert(field.name.to_string(), FieldDefinition::from_ast(field));
    }

    for iface_name in interfaces {
        // Object and interface types must declare a unique list of
        // interfaces they implement.
        //
        // https://spec.graphql.org/October2021/#sel-HAHZhCFFABABsCqgY
        if data.interfaces.contains(iface_name) {
            return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                type_name: data.name.to_string(),
                interface_name: iface_name.to_string(),
                location,
            });
        }
        data.interfaces.push(iface_name.to_string());
    }

    Ok(())
}

fn insert_enum_value(
    values: &mut IndexMap<String, EnumValueDefinition>,
    enum_name: &str,
    value: &ast::schema::EnumValue,
) -> Result<()> {
    if values.contains_key(value.name.as_str()) {
        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
            enum_name: enum_name.to_string(),
            value_name: value.name.to_string(),
            location: Some(value.position.into()),
        });
    }
    values.insert(value.name.to_string(), EnumValueDefinition::from_ast(value));
    Ok(())
}

fn insert_input_field(
    fields: &mut IndexMap<String, InputValueDefinition>,
    type_name: &str,
    field: &ast::schema::InputValue,
) -> Result<()> {
    if fields.contains_key(field.name.as_str()) {
        return Err(SchemaBuildError::DuplicateFieldDefinition {
            type_name: type_name.to_string(),
            field_name: field.name.to_string(),
            location: Some(field.position.into()),
        });
    }
    fields.insert(field.name.to_string(), InputValueDefinition::from_ast(field));
    Ok(())
}

fn definition_position(def: &ast::schema::TypeDefinition) -> graphql_parser::Pos {
    use ast::schema::TypeDefinition;
    match def {
        TypeDefinition::Enum(def) => def.position,
        TypeDefinition::InputObject(def) => def.position,
        TypeDefinition::Interface(def) => def.position,
        TypeDefinition::Object(def) => def.position,
        TypeDefinition::Scalar(def) => def.position,
        TypeDefinition::Union(def) => def.position,
    }
}

fn extension_position(ext: &ast::schema::TypeExtension) -> graphql_parser::Pos {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => ext.position,
        TypeExtension::InputObject(ext) => ext.position,
        TypeExtension::Interface(ext) => ext.position,
        TypeExtension::Object(ext) => ext.position,
        TypeExtension::Scalar(ext) => ext.position,
        TypeExtension::Union(ext) => ext.position,
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location: Option<SourceLocation>,
    },

    #[error(
        "The `{enum_name}` enum defines the `{value_name}` value more than \
        once"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        location: Option<SourceLocation>,
    },

    #[error(
        "The `{type_name}` type defines the `{field_name}` field more than once"
    )]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
        location: Option<SourceLocation>,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        type_name: String,
        interface_name: String,
        location: SourceLocation,
    },

    #[error("The {operation:?} root operation type was declared more than once")]
    DuplicateOperationDefinition {
        operation: RootOperation,
        location: SourceLocation,
    },

    #[error("Multiple types were defined with the name `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
        location: Option<SourceLocation>,
    },

    #[error(
        "The `{type_name}` union lists `{member_name}` as a member more than \
        once"
    )]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        location: SourceLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined anywhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        location: SourceLocation,
    },

    #[error(
        "Attempted to extend `{type_name}` (a {type_kind} type) with an \
        extension of a different kind"
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: &'static str,
        location: SourceLocation,
    },

    #[error("Malformed directive location `{location}` on `@{directive_name}`")]
    InvalidIntrospectionDirectiveLocation {
        directive_name: String,
        location: String,
    },

    #[error("Malformed type reference in introspection result: {reason}")]
    InvalidIntrospectionTypeRef {
        reason: String,
    },

    #[error("Failed to read introspection result: {message}")]
    IntrospectionJson {
        message: String,
    },

    #[error("Error parsing schema string: {0}")]
    ParseError(SyntaxError),

    #[error("Attempted to redefine the built-in `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: Option<SourceLocation>,
    },

    #[error("Attempted to redefine the built-in `{type_name}` type")]
    RedefinitionOfBuiltinType {
        type_name: String,
        location: Option<SourceLocation>,
    },

    #[error("The `{type_name}` type has unknown kind `{kind}`")]
    UnknownIntrospectionTypeKind {
        type_name: String,
        kind: String,
    },
}
