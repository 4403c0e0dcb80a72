use crate::ast;
use crate::types::sdl_writer;
use std::fmt;

/// A live custom (or built-in) scalar type.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) ast_node: Option<ast::schema::ScalarType>,
    pub(crate) description: Option<String>,
    pub(crate) extension_ast_nodes: Vec<ast::schema::ScalarTypeExtension>,
    pub(crate) name: String,
    pub(crate) specified_by_url: Option<String>,
}

impl ScalarType {
    pub(crate) fn from_ast(node: &ast::schema::ScalarType) -> Self {
        Self {
            ast_node: Some(node.clone()),
            description: node.description.clone(),
            extension_ast_nodes: vec![],
            name: node.name.to_string(),
            specified_by_url: specified_by_url_from_ast(&node.directives),
        }
    }

    pub fn ast_node(&self) -> Option<&ast::schema::ScalarType> {
        self.ast_node.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn extension_ast_nodes(&self) -> &[ast::schema::ScalarTypeExtension] {
        self.extension_ast_nodes.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The URL given by this scalar's `@specifiedBy` annotation.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sdl_writer::write_description(f, self.description.as_deref(), "")?;
        write!(f, "scalar {}", self.name)?;
        if let Some(url) = &self.specified_by_url {
            write!(f, " @specifiedBy(url: {})", sdl_writer::string_literal(url))?;
        }
        writeln!(f)
    }
}

pub(crate) fn specified_by_url_from_ast(
    directives: &[ast::query::Directive],
) -> Option<String> {
    directives.iter()
        .filter(|dir| dir.name == "specifiedBy")
        .flat_map(|dir| dir.arguments.iter())
        .find_map(|(name, value)| match value {
            ast::query::Value::String(url) if name == "url" =>
                Some(url.to_string()),
            _ => None,
        })
}
