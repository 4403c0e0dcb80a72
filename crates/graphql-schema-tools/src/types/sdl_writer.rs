//! Helpers shared by the live types' SDL signature printers.

use crate::ast;
use crate::types::DEFAULT_DEPRECATION_REASON;
use std::fmt;
use std::fmt::Write;

pub(crate) fn type_ref_to_string(type_ref: &ast::schema::Type) -> String {
    match type_ref {
        ast::schema::Type::NamedType(name) => name.to_string(),
        ast::schema::Type::ListType(inner) =>
            format!("[{}]", type_ref_to_string(inner)),
        ast::schema::Type::NonNullType(inner) =>
            format!("{}!", type_ref_to_string(inner)),
    }
}

/// Renders a value as a GraphQL literal.
pub(crate) fn value_to_string(value: &ast::schema::Value) -> String {
    use ast::schema::Value;
    match value {
        Value::Boolean(b) => b.to_string(),
        Value::Enum(name) => name.to_string(),
        Value::Float(f) => float_literal(*f),
        Value::Int(n) => match n.as_i64() {
            Some(n) => n.to_string(),
            None => "0".to_string(),
        },
        Value::List(items) => format!(
            "[{}]",
            items.iter().map(value_to_string).collect::<Vec<_>>().join(", "),
        ),
        Value::Null => "null".to_string(),
        Value::Object(fields) => format!(
            "{{{}}}",
            fields.iter()
                .map(|(name, value)| format!("{name}: {}", value_to_string(value)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::String(s) => string_literal(s),
        Value::Variable(name) => format!("${name}"),
    }
}

/// A float literal that cannot be mistaken for an int literal.
fn float_literal(f: f64) -> String {
    let text = f.to_string();
    if text.contains(['.', 'e', 'E']) || !f.is_finite() {
        text
    } else {
        format!("{text}.0")
    }
}

pub(crate) fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            },
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub(crate) fn write_description(
    f: &mut fmt::Formatter<'_>,
    description: Option<&str>,
    indent: &str,
) -> fmt::Result {
    match description {
        Some(description) =>
            writeln!(f, "{indent}{}", string_literal(description)),
        None => Ok(()),
    }
}

pub(crate) fn deprecated_suffix(reason: Option<&str>) -> String {
    match reason {
        None => String::new(),
        Some(DEFAULT_DEPRECATION_REASON) => " @deprecated".to_string(),
        Some(reason) =>
            format!(" @deprecated(reason: {})", string_literal(reason)),
    }
}
