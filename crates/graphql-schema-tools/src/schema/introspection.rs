//! Loading a [`Schema`] from a JSON introspection result.

use crate::ast;
use crate::schema::builtins;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValueDefinition;
use crate::types::FieldDefinition;
use crate::types::InputObjectType;
use crate::types::InputValueDefinition;
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::types::DEFAULT_DEPRECATION_REASON;
use indexmap::IndexMap;
use serde::Deserialize;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntrospectionEnvelope {
    Data { data: IntrospectionQueryResult },
    Bare(IntrospectionQueryResult),
}

#[derive(Deserialize)]
struct IntrospectionQueryResult {
    #[serde(rename = "__schema")]
    schema: IntrospectionSchema,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionSchema {
    #[serde(default)]
    directives: Vec<IntrospectionDirective>,
    mutation_type: Option<IntrospectionNameRef>,
    query_type: Option<IntrospectionNameRef>,
    subscription_type: Option<IntrospectionNameRef>,
    types: Vec<IntrospectionType>,
}

#[derive(Deserialize)]
struct IntrospectionNameRef {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionType {
    description: Option<String>,
    enum_values: Option<Vec<IntrospectionEnumValue>>,
    fields: Option<Vec<IntrospectionField>>,
    input_fields: Option<Vec<IntrospectionInputValue>>,
    interfaces: Option<Vec<IntrospectionTypeRef>>,
    kind: String,
    name: String,
    possible_types: Option<Vec<IntrospectionTypeRef>>,
    #[serde(rename = "specifiedByURL", alias = "specifiedByUrl")]
    specified_by_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionField {
    #[serde(default)]
    args: Vec<IntrospectionInputValue>,
    deprecation_reason: Option<String>,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    name: String,
    #[serde(rename = "type")]
    type_ref: IntrospectionTypeRef,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionInputValue {
    default_value: Option<String>,
    deprecation_reason: Option<String>,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    name: String,
    #[serde(rename = "type")]
    type_ref: IntrospectionTypeRef,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionEnumValue {
    deprecation_reason: Option<String>,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionDirective {
    #[serde(default)]
    args: Vec<IntrospectionInputValue>,
    description: Option<String>,
    #[serde(default)]
    is_repeatable: bool,
    locations: Vec<String>,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionTypeRef {
    kind: String,
    name: Option<String>,
    of_type: Option<Box<IntrospectionTypeRef>>,
}

pub(crate) fn schema_from_json(json: &str) -> Result<Schema> {
    let envelope: IntrospectionEnvelope = serde_json::from_str(json)
        .map_err(|err| SchemaBuildError::IntrospectionJson {
            message: err.to_string(),
        })?;
    let schema = match envelope {
        IntrospectionEnvelope::Data { data } => data.schema,
        IntrospectionEnvelope::Bare(result) => result.schema,
    };

    let mut builder = SchemaBuilder::new();

    for introspected_type in schema.types {
        if builtins::is_builtin_type_name(introspected_type.name.as_str()) {
            continue;
        }
        builder.add_named_type(named_type_from_introspection(introspected_type)?)?;
    }

    for introspected_directive in schema.directives {
        if builtins::is_builtin_directive_name(introspected_directive.name.as_str()) {
            continue;
        }
        builder.add_directive(directive_from_introspection(introspected_directive)?)?;
    }

    builder.query_type_name = schema.query_type.map(|t| t.name);
    builder.mutation_type_name = schema.mutation_type.map(|t| t.name);
    builder.subscription_type_name = schema.subscription_type.map(|t| t.name);

    log::debug!(
        "loaded {} types and {} directives from introspection",
        builder.types.len(),
        builder.directives.len(),
    );

    builder.build()
}

fn named_type_from_introspection(
    introspected: IntrospectionType,
) -> Result<NamedType> {
    let IntrospectionType {
        description,
        enum_values,
        fields,
        input_fields,
        interfaces,
        kind,
        name,
        possible_types,
        specified_by_url,
    } = introspected;

    Ok(match kind.as_str() {
        "ENUM" => {
            let mut values = IndexMap::new();
            for value in enum_values.unwrap_or_default() {
                if values.contains_key(value.name.as_str()) {
                    return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                        enum_name: name,
                        value_name: value.name,
                        location: None,
                    });
                }
                values.insert(value.name.to_string(), EnumValueDefinition {
                    ast_node: None,
                    deprecation_reason: deprecation_reason(
                        value.is_deprecated,
                        value.deprecation_reason,
                    ),
                    description: value.description,
                    name: value.name,
                });
            }
            NamedType::Enum(EnumType {
                ast_node: None,
                description,
                extension_ast_nodes: vec![],
                name,
                values,
            })
        },

        "INPUT_OBJECT" => {
            let mut input_object_fields = IndexMap::new();
            for field in input_fields.unwrap_or_default() {
                let field = input_value_from_introspection(field)?;
                if input_object_fields.contains_key(field.name()) {
                    return Err(SchemaBuildError::DuplicateFieldDefinition {
                        type_name: name,
                        field_name: field.name,
                        location: None,
                    });
                }
                input_object_fields.insert(field.name.to_string(), field);
            }
            NamedType::InputObject(InputObjectType {
                ast_node: None,
                description,
                extension_ast_nodes: vec![],
                fields: input_object_fields,
                name,
            })
        },

        "INTERFACE" => NamedType::Interface(InterfaceType {
            ast_node: None,
            data: object_or_interface_data(
                name,
                description,
                fields.unwrap_or_default(),
                interfaces.unwrap_or_default(),
            )?,
            extension_ast_nodes: vec![],
        }),

        "OBJECT" => NamedType::Object(ObjectType {
            ast_node: None,
            data: object_or_interface_data(
                name,
                description,
                fields.unwrap_or_default(),
                interfaces.unwrap_or_default(),
            )?,
            extension_ast_nodes: vec![],
        }),

        "SCALAR" => NamedType::Scalar(ScalarType {
            ast_node: None,
            description,
            extension_ast_nodes: vec![],
            name,
            specified_by_url,
        }),

        "UNION" => NamedType::Union(UnionType {
            ast_node: None,
            description,
            extension_ast_nodes: vec![],
            members: possible_types.unwrap_or_default()
                .into_iter()
                .map(named_type_ref_name)
                .collect::<Result<Vec<_>>>()?,
            name,
        }),

        _ => return Err(SchemaBuildError::UnknownIntrospectionTypeKind {
            type_name: name,
            kind,
        }),
    })
}

fn object_or_interface_data(
    name: String,
    description: Option<String>,
    fields: Vec<IntrospectionField>,
    interfaces: Vec<IntrospectionTypeRef>,
) -> Result<ObjectOrInterfaceTypeData> {
    let mut field_defs = IndexMap::new();
    for field in fields {
        if field_defs.contains_key(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                type_name: name,
                field_name: field.name,
                location: None,
            });
        }
        field_defs.insert(field.name.to_string(), FieldDefinition {
            arguments: field.args.into_iter()
                .map(input_value_from_introspection)
                .collect::<Result<Vec<_>>>()?,
            ast_node: None,
            deprecation_reason: deprecation_reason(
                field.is_deprecated,
                field.deprecation_reason,
            ),
            description: field.description,
            field_type: type_ref_to_ast(field.type_ref)?,
            name: field.name,
        });
    }

    Ok(ObjectOrInterfaceTypeData {
        description,
        fields: field_defs,
        interfaces: interfaces.into_iter()
            .map(named_type_ref_name)
            .collect::<Result<Vec<_>>>()?,
        name,
    })
}

fn directive_from_introspection(
    introspected: IntrospectionDirective,
) -> Result<Directive> {
    let locations = introspected.locations.iter()
        .map(|location| {
            location.parse::<ast::schema::DirectiveLocation>()
                .map_err(|_| SchemaBuildError::InvalidIntrospectionDirectiveLocation {
                    directive_name: introspected.name.to_string(),
                    location: location.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Directive {
        arguments: introspected.args.into_iter()
            .map(input_value_from_introspection)
            .collect::<Result<Vec<_>>>()?,
        ast_node: None,
        description: introspected.description,
        locations,
        name: introspected.name,
        repeatable: introspected.is_repeatable,
    })
}

fn input_value_from_introspection(
    introspected: IntrospectionInputValue,
) -> Result<InputValueDefinition> {
    Ok(InputValueDefinition {
        ast_node: None,
        default_value: introspected.default_value,
        deprecation_reason: deprecation_reason(
            introspected.is_deprecated,
            introspected.deprecation_reason,
        ),
        description: introspected.description,
        name: introspected.name,
        value_type: type_ref_to_ast(introspected.type_ref)?,
    })
}

fn deprecation_reason(
    is_deprecated: bool,
    reason: Option<String>,
) -> Option<String> {
    if is_deprecated {
        Some(reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()))
    } else {
        None
    }
}

fn named_type_ref_name(type_ref: IntrospectionTypeRef) -> Result<String> {
    type_ref.name.ok_or_else(|| SchemaBuildError::InvalidIntrospectionTypeRef {
        reason: format!("a `{}` reference has no name", type_ref.kind),
    })
}

/// Rebuilds a (possibly wrapped) type reference such as `[Int!]!`.
fn type_ref_to_ast(type_ref: IntrospectionTypeRef) -> Result<ast::schema::Type> {
    use ast::schema::Type;
    match type_ref.kind.as_str() {
        "LIST" | "NON_NULL" => {
            let Some(of_type) = type_ref.of_type else {
                return Err(SchemaBuildError::InvalidIntrospectionTypeRef {
                    reason: format!("a `{}` wrapper has no `ofType`", type_ref.kind),
                });
            };
            let inner = type_ref_to_ast(*of_type)?;
            if type_ref.kind == "LIST" {
                Ok(Type::ListType(Box::new(inner)))
            } else if matches!(inner, Type::NonNullType(_)) {
                Err(SchemaBuildError::InvalidIntrospectionTypeRef {
                    reason: "a `NON_NULL` wrapper wraps another `NON_NULL`".to_string(),
                })
            } else {
                Ok(Type::NonNullType(Box::new(inner)))
            }
        },
        _ => Ok(Type::NamedType(named_type_ref_name(type_ref)?)),
    }
}
