use crate::ast;
use crate::types::input_value_definition::format_arguments;
use crate::types::sdl_writer;
use crate::types::InputValueDefinition;
use std::fmt;

/// A live directive definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) arguments: Vec<InputValueDefinition>,
    pub(crate) ast_node: Option<ast::schema::DirectiveDefinition>,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<ast::schema::DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}

impl Directive {
    pub(crate) fn from_ast(node: &ast::schema::DirectiveDefinition) -> Self {
        Self {
            arguments: node.arguments.iter()
                .map(InputValueDefinition::from_ast)
                .collect(),
            ast_node: Some(node.clone()),
            description: node.description.clone(),
            locations: node.locations.clone(),
            name: node.name.to_string(),
            repeatable: node.repeatable,
        }
    }

    pub fn arguments(&self) -> &[InputValueDefinition] {
        self.arguments.as_slice()
    }

    /// The syntax node this directive was built from. Directives loaded
    /// from introspection results have none.
    pub fn ast_node(&self) -> Option<&ast::schema::DirectiveDefinition> {
        self.ast_node.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[ast::schema::DirectiveLocation] {
        self.locations.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn clear_ast_nodes(&mut self) {
        self.ast_node = None;
        for arg in &mut self.arguments {
            arg.ast_node = None;
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sdl_writer::write_description(f, self.description.as_deref(), "")?;
        write!(f, "directive @{}", self.name)?;
        format_arguments(f, &self.arguments)?;
        if self.repeatable {
            write!(f, " repeatable")?;
        }
        writeln!(
            f,
            " on {}",
            self.locations.iter()
                .map(|loc| loc.as_str())
                .collect::<Vec<_>>()
                .join(" | "),
        )
    }
}
