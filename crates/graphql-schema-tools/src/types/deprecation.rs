use crate::ast;

/// The reason `@deprecated` implies when none is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Reads the deprecation reason off a node's `@deprecated` annotation, if it
/// has one.
pub(crate) fn deprecation_reason_from_ast(
    directives: &[ast::query::Directive],
) -> Option<String> {
    let deprecated = directives.iter().find(|dir| dir.name == "deprecated")?;
    let reason = deprecated.arguments.iter()
        .find_map(|(name, value)| match value {
            ast::query::Value::String(reason) if name == "reason" =>
                Some(reason.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string());
    Some(reason)
}
