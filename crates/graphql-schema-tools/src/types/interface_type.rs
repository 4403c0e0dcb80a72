use crate::ast;
use crate::types::FieldDefinition;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use std::fmt;

/// A live interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub(crate) ast_node: Option<ast::schema::InterfaceType>,
    pub(crate) data: ObjectOrInterfaceTypeData,
    pub(crate) extension_ast_nodes: Vec<ast::schema::InterfaceTypeExtension>,
}

impl InterfaceType {
    pub fn ast_node(&self) -> Option<&ast::schema::InterfaceType> {
        self.ast_node.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    pub fn extension_ast_nodes(&self) -> &[ast::schema::InterfaceTypeExtension] {
        self.extension_ast_nodes.as_slice()
    }

    /// The live field set, including fields contributed by extensions, in
    /// definition order.
    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.data.fields
    }

    /// Names of the interfaces this interface implements.
    pub fn interfaces(&self) -> &[String] {
        self.data.interfaces.as_slice()
    }

    pub fn name(&self) -> &str {
        self.data.name.as_str()
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt_signature(f, "interface")
    }
}
