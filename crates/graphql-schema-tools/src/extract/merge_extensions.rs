use crate::ast;
use crate::ast::NamedNode;

/// Folds extension nodes into a copy of their base definition node.
///
/// Extensions are applied in order. Each one appends its directives to the
/// base node's directives, and its list-valued contributions (fields,
/// implemented interfaces, enum values or union members) to the base node's
/// list of the same name. An extension of a different kind than its base
/// node has nowhere to put anything but its directives, so the rest of what
/// it contributes is dropped.
pub fn merge_extensions(
    base: ast::schema::TypeDefinition,
    extensions: &[ast::schema::TypeExtension],
) -> ast::schema::TypeDefinition {
    use ast::schema::TypeDefinition as Def;
    use ast::schema::TypeExtension as Ext;

    let mut merged = base;
    for ext in extensions {
        match (&mut merged, ext) {
            (Def::Enum(def), Ext::Enum(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
                def.values.extend(ext.values.iter().cloned());
            },

            (Def::InputObject(def), Ext::InputObject(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
                def.fields.extend(ext.fields.iter().cloned());
            },

            (Def::Interface(def), Ext::Interface(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
                def.implements_interfaces.extend(ext.implements_interfaces.iter().cloned());
                def.fields.extend(ext.fields.iter().cloned());
            },

            (Def::Object(def), Ext::Object(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
                def.implements_interfaces.extend(ext.implements_interfaces.iter().cloned());
                def.fields.extend(ext.fields.iter().cloned());
            },

            (Def::Scalar(def), Ext::Scalar(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
            },

            (Def::Union(def), Ext::Union(ext)) => {
                def.directives.extend(ext.directives.iter().cloned());
                def.types.extend(ext.types.iter().cloned());
            },

            (def, ext) => {
                log::debug!(
                    "Merging only the directives of an extension of `{}` into \
                    a definition of a different kind.",
                    ext.node_name(),
                );
                directives_mut(def).extend(extension_directives(ext).iter().cloned());
            },
        }
    }
    merged
}

fn directives_mut(
    def: &mut ast::schema::TypeDefinition,
) -> &mut Vec<ast::query::Directive> {
    use ast::schema::TypeDefinition;
    match def {
        TypeDefinition::Enum(def) => &mut def.directives,
        TypeDefinition::InputObject(def) => &mut def.directives,
        TypeDefinition::Interface(def) => &mut def.directives,
        TypeDefinition::Object(def) => &mut def.directives,
        TypeDefinition::Scalar(def) => &mut def.directives,
        TypeDefinition::Union(def) => &mut def.directives,
    }
}

fn extension_directives(
    ext: &ast::schema::TypeExtension,
) -> &[ast::query::Directive] {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => &ext.directives,
        TypeExtension::InputObject(ext) => &ext.directives,
        TypeExtension::Interface(ext) => &ext.directives,
        TypeExtension::Object(ext) => &ext.directives,
        TypeExtension::Scalar(ext) => &ext.directives,
        TypeExtension::Union(ext) => &ext.directives,
    }
}
