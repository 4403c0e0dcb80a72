use crate::ast;
use crate::types::deprecation_reason_from_ast;
use crate::types::input_value_definition::format_arguments;
use crate::types::sdl_writer;
use crate::types::InputValueDefinition;
use std::fmt;

/// A field of an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub(crate) arguments: Vec<InputValueDefinition>,
    pub(crate) ast_node: Option<ast::schema::Field>,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) field_type: ast::schema::Type,
    pub(crate) name: String,
}

impl FieldDefinition {
    pub(crate) fn from_ast(node: &ast::schema::Field) -> Self {
        Self {
            arguments: node.arguments.iter()
                .map(InputValueDefinition::from_ast)
                .collect(),
            ast_node: Some(node.clone()),
            deprecation_reason: deprecation_reason_from_ast(&node.directives),
            description: node.description.clone(),
            field_type: node.field_type.clone(),
            name: node.name.to_string(),
        }
    }

    pub fn arguments(&self) -> &[InputValueDefinition] {
        self.arguments.as_slice()
    }

    /// The syntax node this field was built from, if any.
    pub fn ast_node(&self) -> Option<&ast::schema::Field> {
        self.ast_node.as_ref()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field_type(&self) -> &ast::schema::Type {
        &self.field_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sdl_writer::write_description(f, self.description.as_deref(), "  ")?;
        write!(f, "  {}", self.name)?;
        format_arguments(f, &self.arguments)?;
        writeln!(
            f,
            ": {}{}",
            sdl_writer::type_ref_to_string(&self.field_type),
            sdl_writer::deprecated_suffix(self.deprecation_reason.as_deref()),
        )
    }
}
