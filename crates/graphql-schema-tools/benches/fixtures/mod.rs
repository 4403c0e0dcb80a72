use std::fmt::Write;

pub const SMALL_SCHEMA: &str = include_str!("small_schema.graphql");

/// Generates a schema of `count` object types declared in reverse name
/// order, each with its fields and field arguments also declared in reverse
/// order, so that normalizing it reorders everything.
pub fn reversed_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 200);
    for i in (0..count).rev() {
        writeln!(out, "type Type{i:05} implements Node @key(fields: \"id\") {{").unwrap();
        for field in (0..8).rev() {
            writeln!(
                out,
                "  field{field}(last: Int, first: Int = {field}): [Type{:05}!]",
                (i + field) % count,
            ).unwrap();
        }
        out.push_str("  id: ID!\n}\n\n");
    }
    out.push_str("interface Node {\n  id: ID!\n}\n");
    out.push_str("directive @key(fields: String!) on OBJECT\n");
    out
}
