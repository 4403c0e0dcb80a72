use crate::ast;
use crate::types::sdl_writer;
use std::fmt;

/// A live union type.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) ast_node: Option<ast::schema::UnionType>,
    pub(crate) description: Option<String>,
    pub(crate) extension_ast_nodes: Vec<ast::schema::UnionTypeExtension>,
    /// Names of the member types, including members added by extensions.
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}

impl UnionType {
    pub(crate) fn from_ast(node: &ast::schema::UnionType) -> Self {
        Self {
            ast_node: Some(node.clone()),
            description: node.description.clone(),
            extension_ast_nodes: vec![],
            members: node.types.clone(),
            name: node.name.to_string(),
        }
    }

    pub fn ast_node(&self) -> Option<&ast::schema::UnionType> {
        self.ast_node.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn extension_ast_nodes(&self) -> &[ast::schema::UnionTypeExtension] {
        self.extension_ast_nodes.as_slice()
    }

    pub fn members(&self) -> &[String] {
        self.members.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sdl_writer::write_description(f, self.description.as_deref(), "")?;
        write!(f, "union {}", self.name)?;
        if !self.members.is_empty() {
            write!(f, " = {}", self.members.join(" | "))?;
        }
        writeln!(f)
    }
}
