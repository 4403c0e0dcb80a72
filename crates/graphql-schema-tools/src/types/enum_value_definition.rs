use crate::ast;
use crate::types::deprecation_reason_from_ast;
use crate::types::sdl_writer;
use std::fmt;

/// A value defined on an [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub(crate) ast_node: Option<ast::schema::EnumValue>,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}

impl EnumValueDefinition {
    pub(crate) fn from_ast(node: &ast::schema::EnumValue) -> Self {
        Self {
            ast_node: Some(node.clone()),
            deprecation_reason: deprecation_reason_from_ast(&node.directives),
            description: node.description.clone(),
            name: node.name.to_string(),
        }
    }

    pub fn ast_node(&self) -> Option<&ast::schema::EnumValue> {
        self.ast_node.as_ref()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for EnumValueDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sdl_writer::write_description(f, self.description.as_deref(), "  ")?;
        writeln!(
            f,
            "  {}{}",
            self.name,
            sdl_writer::deprecated_suffix(self.deprecation_reason.as_deref()),
        )
    }
}
