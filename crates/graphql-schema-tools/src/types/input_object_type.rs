use crate::ast;
use crate::types::sdl_writer;
use crate::types::InputValueDefinition;
use indexmap::IndexMap;
use std::fmt;

/// A live input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) ast_node: Option<ast::schema::InputObjectType>,
    pub(crate) description: Option<String>,
    pub(crate) extension_ast_nodes: Vec<ast::schema::InputObjectTypeExtension>,
    pub(crate) fields: IndexMap<String, InputValueDefinition>,
    pub(crate) name: String,
}

impl InputObjectType {
    pub fn ast_node(&self) -> Option<&ast::schema::InputObjectType> {
        self.ast_node.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn extension_ast_nodes(&self) -> &[ast::schema::InputObjectTypeExtension] {
        self.extension_ast_nodes.as_slice()
    }

    pub fn fields(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for InputObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sdl_writer::write_description(f, self.description.as_deref(), "")?;
        write!(f, "input {}", self.name)?;
        if self.fields.is_empty() {
            return writeln!(f);
        }
        writeln!(f, " {{")?;
        for field in self.fields.values() {
            // Field descriptions go on their own line, unlike argument
            // descriptions.
            sdl_writer::write_description(f, field.description(), "  ")?;
            let mut undescribed = field.clone();
            undescribed.description = None;
            writeln!(f, "  {undescribed}")?;
        }
        writeln!(f, "}}")
    }
}
