use crate::ast;
use crate::types::deprecation_reason_from_ast;
use crate::types::sdl_writer;
use std::fmt;

/// An argument of a field or directive, or a field of an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub(crate) ast_node: Option<ast::schema::InputValue>,
    /// The default value as a GraphQL literal.
    pub(crate) default_value: Option<String>,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) value_type: ast::schema::Type,
}

impl InputValueDefinition {
    pub(crate) fn from_ast(node: &ast::schema::InputValue) -> Self {
        Self {
            ast_node: Some(node.clone()),
            default_value: node.default_value.as_ref()
                .map(sdl_writer::value_to_string),
            deprecation_reason: deprecation_reason_from_ast(&node.directives),
            description: node.description.clone(),
            name: node.name.to_string(),
            value_type: node.value_type.clone(),
        }
    }

    /// The syntax node this input value was built from, if any.
    pub fn ast_node(&self) -> Option<&ast::schema::InputValue> {
        self.ast_node.as_ref()
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
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

    pub fn value_type(&self) -> &ast::schema::Type {
        &self.value_type
    }
}

impl fmt::Display for InputValueDefinition {
    /// Prints `"description" name: Type = default @deprecated(...)` on one
    /// line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(description) = &self.description {
            write!(f, "{} ", sdl_writer::string_literal(description))?;
        }
        write!(
            f,
            "{}: {}",
            self.name,
            sdl_writer::type_ref_to_string(&self.value_type),
        )?;
        if let Some(default_value) = &self.default_value {
            write!(f, " = {default_value}")?;
        }
        write!(
            f,
            "{}",
            sdl_writer::deprecated_suffix(self.deprecation_reason.as_deref()),
        )
    }
}

/// Prints `(a: Int, b: String)`, or nothing for an empty list.
pub(crate) fn format_arguments(
    f: &mut fmt::Formatter<'_>,
    arguments: &[InputValueDefinition],
) -> fmt::Result {
    if arguments.is_empty() {
        return Ok(());
    }
    write!(
        f,
        "({})",
        arguments.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    )
}
