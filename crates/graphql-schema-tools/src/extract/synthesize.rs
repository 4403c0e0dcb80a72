use crate::ast;
use crate::ast::NamedNode;
use crate::extract::ExtractError;
use crate::types::NamedType;
use crate::SyntaxError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, ExtractError>;

/// Recovers a definition node for a live type by printing its SDL signature
/// and parsing the result.
///
/// The node reflects the type's live metadata (fields, arguments,
/// descriptions, deprecations, `@specifiedBy`), not whatever syntax it was
/// originally written in.
pub fn synthesize_node(
    named_type: &NamedType,
) -> Result<ast::schema::TypeDefinition> {
    let type_name = named_type.name();
    let signature = named_type.to_string();
    log::debug!("Synthesizing a syntax node for `{type_name}`.");

    let doc = graphql_parser::parse_schema::<String>(signature.as_str())
        .map_err(|err| ExtractError::Synthesis {
            type_name: type_name.to_string(),
            error: SyntaxError::from_parser_error(&err, signature.as_str()),
        })?
        .into_static();

    let mut definitions = doc.definitions.into_iter();
    match (definitions.next(), definitions.next()) {
        (Some(ast::schema::Definition::TypeDefinition(def)), None)
            if def.node_name() == type_name && is_same_kind(named_type, &def) =>
            Ok(def),
        _ => Err(ExtractError::UnexpectedSynthesizedDefinition {
            type_name: type_name.to_string(),
            type_kind: named_type.kind_name(),
        }),
    }
}

fn is_same_kind(
    named_type: &NamedType,
    def: &ast::schema::TypeDefinition,
) -> bool {
    use ast::schema::TypeDefinition;
    matches!(
        (named_type, def),
        (NamedType::Enum(_), TypeDefinition::Enum(_))
        | (NamedType::InputObject(_), TypeDefinition::InputObject(_))
        | (NamedType::Interface(_), TypeDefinition::Interface(_))
        | (NamedType::Object(_), TypeDefinition::Object(_))
        | (NamedType::Scalar(_), TypeDefinition::Scalar(_))
        | (NamedType::Union(_), TypeDefinition::Union(_))
    )
}

/// Synthesized nodes, keyed by type name, for the duration of one
/// extraction.
#[derive(Debug, Default)]
pub(crate) struct SynthesisCache {
    nodes: HashMap<String, ast::schema::TypeDefinition>,
}

impl SynthesisCache {
    pub(crate) fn get_or_synthesize(
        &mut self,
        named_type: &NamedType,
    ) -> Result<&ast::schema::TypeDefinition> {
        match self.nodes.entry(named_type.name().to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(synthesize_node(named_type)?)),
        }
    }
}
