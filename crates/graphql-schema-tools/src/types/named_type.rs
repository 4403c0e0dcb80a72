use crate::ast;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use std::fmt;

/// Any named type held by a [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq)]
pub enum NamedType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}

impl NamedType {
    /// A copy of the base definition node this type was built from.
    pub fn ast_node(&self) -> Option<ast::schema::TypeDefinition> {
        use ast::schema::TypeDefinition;
        match self {
            Self::Enum(t) => t.ast_node().cloned().map(TypeDefinition::Enum),
            Self::InputObject(t) =>
                t.ast_node().cloned().map(TypeDefinition::InputObject),
            Self::Interface(t) =>
                t.ast_node().cloned().map(TypeDefinition::Interface),
            Self::Object(t) => t.ast_node().cloned().map(TypeDefinition::Object),
            Self::Scalar(t) => t.ast_node().cloned().map(TypeDefinition::Scalar),
            Self::Union(t) => t.ast_node().cloned().map(TypeDefinition::Union),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// Copies of the extension nodes that were folded into this type, in
    /// the order they were loaded.
    pub fn extension_ast_nodes(&self) -> Vec<ast::schema::TypeExtension> {
        use ast::schema::TypeExtension;
        match self {
            Self::Enum(t) => t.extension_ast_nodes().iter()
                .cloned().map(TypeExtension::Enum).collect(),
            Self::InputObject(t) => t.extension_ast_nodes().iter()
                .cloned().map(TypeExtension::InputObject).collect(),
            Self::Interface(t) => t.extension_ast_nodes().iter()
                .cloned().map(TypeExtension::Interface).collect(),
            Self::Object(t) => t.extension_ast_nodes().iter()
                .cloned().map(TypeExtension::Object).collect(),
            Self::Scalar(t) => t.extension_ast_nodes().iter()
                .cloned().map(TypeExtension::Scalar).collect(),
            Self::Union(t) => t.extension_ast_nodes().iter()
                .cloned().map(TypeExtension::Union).collect(),
        }
    }

    /// Whether this type carries a field set (objects, interfaces and input
    /// objects).
    pub fn has_fields(&self) -> bool {
        matches!(self, Self::InputObject(_) | Self::Interface(_) | Self::Object(_))
    }

    /// A lowercase, human-readable name for this type's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Enum(_) => "enum",
            Self::InputObject(_) => "input object",
            Self::Interface(_) => "interface",
            Self::Object(_) => "object",
            Self::Scalar(_) => "scalar",
            Self::Union(_) => "union",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    /// Forgets every syntax node this type (and each of its fields,
    /// arguments and values) was built from.
    pub(crate) fn clear_ast_nodes(&mut self) {
        match self {
            Self::Enum(t) => {
                t.ast_node = None;
                t.extension_ast_nodes.clear();
                for value in t.values.values_mut() {
                    value.ast_node = None;
                }
            },
            Self::InputObject(t) => {
                t.ast_node = None;
                t.extension_ast_nodes.clear();
                for field in t.fields.values_mut() {
                    field.ast_node = None;
                }
            },
            Self::Interface(t) => {
                t.ast_node = None;
                t.extension_ast_nodes.clear();
                clear_field_nodes(t.data.fields.values_mut());
            },
            Self::Object(t) => {
                t.ast_node = None;
                t.extension_ast_nodes.clear();
                clear_field_nodes(t.data.fields.values_mut());
            },
            Self::Scalar(t) => {
                t.ast_node = None;
                t.extension_ast_nodes.clear();
            },
            Self::Union(t) => {
                t.ast_node = None;
                t.extension_ast_nodes.clear();
            },
        }
    }
}

fn clear_field_nodes<'a>(
    fields: impl Iterator<Item = &'a mut crate::types::FieldDefinition>,
) {
    for field in fields {
        field.ast_node = None;
        for arg in &mut field.arguments {
            arg.ast_node = None;
        }
    }
}

impl fmt::Display for NamedType {
    /// Prints this type's SDL signature, reconstructed from its live
    /// metadata rather than from any syntax node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum(t) => fmt::Display::fmt(t, f),
            Self::InputObject(t) => fmt::Display::fmt(t, f),
            Self::Interface(t) => fmt::Display::fmt(t, f),
            Self::Object(t) => fmt::Display::fmt(t, f),
            Self::Scalar(t) => fmt::Display::fmt(t, f),
            Self::Union(t) => fmt::Display::fmt(t, f),
        }
    }
}
