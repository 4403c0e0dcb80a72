use crate::ast;
use crate::types::sdl_writer;
use crate::types::EnumValueDefinition;
use indexmap::IndexMap;
use std::fmt;

/// A live enum type.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) ast_node: Option<ast::schema::EnumType>,
    pub(crate) description: Option<String>,
    pub(crate) extension_ast_nodes: Vec<ast::schema::EnumTypeExtension>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValueDefinition>,
}

impl EnumType {
    pub fn ast_node(&self) -> Option<&ast::schema::EnumType> {
        self.ast_node.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn extension_ast_nodes(&self) -> &[ast::schema::EnumTypeExtension] {
        self.extension_ast_nodes.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &IndexMap<String, EnumValueDefinition> {
        &self.values
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sdl_writer::write_description(f, self.description.as_deref(), "")?;
        write!(f, "enum {}", self.name)?;
        if self.values.is_empty() {
            return writeln!(f);
        }
        writeln!(f, " {{")?;
        for value in self.values.values() {
            write!(f, "{value}")?;
        }
        writeln!(f, "}}")
    }
}
