use crate::ast;
use crate::ast::NamedNode;
use crate::extract::merge_extensions;
use crate::extract::synthesize::SynthesisCache;
use crate::extract::ExtractError;
use crate::extract::ExtractOptions;
use crate::extract::FieldFilter;
use crate::extract::FieldNodeRef;
use crate::schema::is_builtin_directive_name;
use crate::schema::is_builtin_type_name;
use crate::schema::SchemaReflection;
use crate::sort_document;
use crate::types::FieldDefinition;
use crate::types::InputValueDefinition;
use crate::types::NamedType;
use crate::Definition;
use crate::Document;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ExtractError>;

/// Builds a canonically ordered type-system [`Document`] describing every
/// non-built-in type and directive of a live schema.
///
/// - Object, interface and input object types are rebuilt around their live
///   field sets. Each field keeps its own syntax node where it has one and
///   otherwise borrows the same-named field of a node synthesized from the
///   type's printed signature.
/// - Other types with a syntax node have their extension nodes merged in
///   (see [`merge_extensions()`]). Other types without one are synthesized
///   (see [`synthesize_node()`](crate::synthesize_node)).
/// - Directives without a syntax node are left out.
///
/// The schema definition itself is never part of the result.
pub fn extract_document(
    schema: &impl SchemaReflection,
    options: &ExtractOptions<'_>,
) -> Result<Document> {
    let config = schema.to_config();
    let mut synthesized = SynthesisCache::default();

    let mut type_nodes = vec![];
    for named_type in config.types {
        if is_builtin_type_name(named_type.name()) {
            continue;
        }

        let type_node =
            if named_type.has_fields() {
                extract_field_bearing_type(
                    named_type,
                    &mut synthesized,
                    &options.filter_fields,
                )?
            } else if let Some(base_node) = named_type.ast_node() {
                merge_extensions(base_node, &named_type.extension_ast_nodes())
            } else {
                synthesized.get_or_synthesize(named_type)?.clone()
            };

        if options.filter_types.keeps(&type_node) {
            type_nodes.push(type_node);
        } else {
            log::trace!("Filtered out the `{}` type.", type_node.node_name());
        }
    }

    let mut directive_nodes = vec![];
    for directive in config.directives {
        if is_builtin_directive_name(directive.name()) {
            continue;
        }

        let Some(directive_node) = directive.ast_node() else {
            log::debug!(
                "Leaving out `@{}`, which has no syntax node.",
                directive.name(),
            );
            continue;
        };

        if options.filter_directives.keeps(directive_node) {
            directive_nodes.push(directive_node.clone());
        } else {
            log::trace!("Filtered out the `@{}` directive.", directive.name());
        }
    }

    let definitions = directive_nodes.into_iter()
        .map(Definition::from)
        .chain(type_nodes.into_iter().map(Definition::from));

    Ok(Document::new(sort_document(definitions)))
}

/// Rebuilds an object, interface or input object type node around the
/// type's live field set.
fn extract_field_bearing_type(
    named_type: &NamedType,
    synthesized: &mut SynthesisCache,
    filter_fields: &FieldFilter<'_>,
) -> Result<ast::schema::TypeDefinition> {
    use ast::schema::TypeDefinition;

    let mut type_node = match named_type.ast_node() {
        Some(base_node) => base_node,
        None => synthesized.get_or_synthesize(named_type)?.clone(),
    };

    match (&mut type_node, named_type) {
        (TypeDefinition::Object(def), NamedType::Object(live)) => {
            def.fields.clear();
            let owner = TypeDefinition::Object(def.clone());
            def.fields = output_fields(
                named_type,
                live.fields(),
                &owner,
                synthesized,
                filter_fields,
            )?;
        },

        (TypeDefinition::Interface(def), NamedType::Interface(live)) => {
            def.fields.clear();
            let owner = TypeDefinition::Interface(def.clone());
            def.fields = output_fields(
                named_type,
                live.fields(),
                &owner,
                synthesized,
                filter_fields,
            )?;
        },

        (TypeDefinition::InputObject(def), NamedType::InputObject(live)) => {
            def.fields.clear();
            let owner = TypeDefinition::InputObject(def.clone());
            def.fields = input_fields(
                named_type,
                live.fields(),
                &owner,
                synthesized,
                filter_fields,
            )?;
        },

        _ => return Err(ExtractError::UnexpectedSynthesizedDefinition {
            type_name: named_type.name().to_string(),
            type_kind: named_type.kind_name(),
        }),
    }

    Ok(type_node)
}

fn output_fields(
    named_type: &NamedType,
    live_fields: &IndexMap<String, FieldDefinition>,
    owner: &ast::schema::TypeDefinition,
    synthesized: &mut SynthesisCache,
    filter_fields: &FieldFilter<'_>,
) -> Result<Vec<ast::schema::Field>> {
    use ast::schema::TypeDefinition;

    let mut fields = vec![];
    for live_field in live_fields.values() {
        let field = match live_field.ast_node() {
            Some(field) => field.clone(),
            None => {
                let synthesized_fields: &[ast::schema::Field] =
                    match synthesized.get_or_synthesize(named_type)? {
                        TypeDefinition::Interface(def) => def.fields.as_slice(),
                        TypeDefinition::Object(def) => def.fields.as_slice(),
                        _ => &[],
                    };
                synthesized_fields.iter()
                    .find(|field| field.name == live_field.name())
                    .cloned()
                    .ok_or_else(|| ExtractError::MissingSynthesizedField {
                        type_name: named_type.name().to_string(),
                        field_name: live_field.name().to_string(),
                    })?
            },
        };

        if filter_fields.keeps(FieldNodeRef::Field(&field), owner) {
            fields.push(field);
        } else {
            log::trace!(
                "Filtered out the `{}.{}` field.",
                named_type.name(),
                field.name,
            );
        }
    }
    Ok(fields)
}

fn input_fields(
    named_type: &NamedType,
    live_fields: &IndexMap<String, InputValueDefinition>,
    owner: &ast::schema::TypeDefinition,
    synthesized: &mut SynthesisCache,
    filter_fields: &FieldFilter<'_>,
) -> Result<Vec<ast::schema::InputValue>> {
    use ast::schema::TypeDefinition;

    let mut fields = vec![];
    for live_field in live_fields.values() {
        let field = match live_field.ast_node() {
            Some(field) => field.clone(),
            None => {
                let synthesized_fields: &[ast::schema::InputValue] =
                    match synthesized.get_or_synthesize(named_type)? {
                        TypeDefinition::InputObject(def) => def.fields.as_slice(),
                        _ => &[],
                    };
                synthesized_fields.iter()
                    .find(|field| field.name == live_field.name())
                    .cloned()
                    .ok_or_else(|| ExtractError::MissingSynthesizedField {
                        type_name: named_type.name().to_string(),
                        field_name: live_field.name().to_string(),
                    })?
            },
        };

        if filter_fields.keeps(FieldNodeRef::InputValue(&field), owner) {
            fields.push(field);
        } else {
            log::trace!(
                "Filtered out the `{}.{}` input field.",
                named_type.name(),
                field.name,
            );
        }
    }
    Ok(fields)
}
