use crate::ast;
use crate::types::FieldDefinition;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use std::fmt;

/// A live object type.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub(crate) ast_node: Option<ast::schema::ObjectType>,
    pub(crate) data: ObjectOrInterfaceTypeData,
    pub(crate) extension_ast_nodes: Vec<ast::schema::ObjectTypeExtension>,
}

impl ObjectType {
    pub fn ast_node(&self) -> Option<&ast::schema::ObjectType> {
        self.ast_node.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    pub fn extension_ast_nodes(&self) -> &[ast::schema::ObjectTypeExtension] {
        self.extension_ast_nodes.as_slice()
    }

    /// The live field set, including fields contributed by extensions, in
    /// definition order.
    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.data.fields
    }

    /// Names of the interfaces this type implements.
    pub fn interfaces(&self) -> &[String] {
        self.data.interfaces.as_slice()
    }

    pub fn name(&self) -> &str {
        self.data.name.as_str()
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt_signature(f, "type")
    }
}
