use crate::ast;
use crate::Definition;
use crate::Document;

/// Renders a [`Document`] as GraphQL text using `graphql_parser`'s
/// formatter: two-space indentation, one blank line between top-level
/// definitions, `, ` between arguments.
///
/// Definitions are printed in document order. Consecutive type-system or
/// executable definitions are rendered as one run; runs are separated by a
/// blank line like any two definitions.
pub fn print(document: &Document) -> String {
    let mut runs: Vec<String> = vec![];
    let mut definitions = document.definitions.iter().peekable();

    while let Some(first) = definitions.next() {
        let run = match first {
            Definition::TypeSystem(def) => {
                let mut run = ast::schema::Document {
                    definitions: vec![def.clone()],
                };
                while let Some(Definition::TypeSystem(def)) = definitions.peek() {
                    run.definitions.push(def.clone());
                    definitions.next();
                }
                run.to_string()
            },
            Definition::Executable(def) => {
                let mut run = ast::query::Document {
                    definitions: vec![def.clone()],
                };
                while let Some(Definition::Executable(def)) = definitions.peek() {
                    run.definitions.push(def.clone());
                    definitions.next();
                }
                run.to_string()
            },
            Definition::SchemaExtension(ext) => print_schema_extension(ext),
        };
        runs.push(run);
    }

    runs.join("\n")
}

/// `extend schema` followed by the extension's directives and, if it adds
/// any, its root operation types.
fn print_schema_extension(ext: &ast::schema::SchemaDefinition) -> String {
    let printed = ext.to_string();
    let adds_operations =
        ext.query.is_some() || ext.mutation.is_some() || ext.subscription.is_some();
    if adds_operations {
        return format!("extend {printed}");
    }

    let header = printed.trim_end();
    let header = header.strip_suffix('}').unwrap_or(header).trim_end();
    let header = header.strip_suffix('{').unwrap_or(header).trim_end();
    format!("extend {header}\n")
}
