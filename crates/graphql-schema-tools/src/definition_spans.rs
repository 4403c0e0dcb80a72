use std::ops::Range;

/// Keywords that open a top-level definition.
const DEFINITION_KEYWORDS: [&str; 13] = [
    "directive",
    "enum",
    "extend",
    "fragment",
    "input",
    "interface",
    "mutation",
    "query",
    "scalar",
    "schema",
    "subscription",
    "type",
    "union",
];

/// Definitions whose grammar has no `{ ... }` block, so a `{` that follows
/// them opens an anonymous operation.
const BLOCKLESS_KEYWORDS: [&str; 3] = ["directive", "scalar", "union"];

/// Which grammar a top-level definition belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DefinitionFamily {
    TypeSystem,
    Executable,
    SchemaExtension,
}

/// The byte range of one top-level definition, including its description.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DefinitionSpan {
    pub range: Range<usize>,
    pub family: DefinitionFamily,

    /// Byte offset of the definition's leading keyword (or of the `{` that
    /// opens an anonymous operation).
    pub keyword_start: Option<usize>,

    /// Whether a top-level `{ ... }` block was closed inside the span.
    pub has_block: bool,
}

#[derive(Default)]
struct OpenSpan<'a> {
    start: usize,
    keyword: Option<&'a str>,
    keyword_start: Option<usize>,
    extend_target: Option<&'a str>,
    has_block: bool,
}

impl OpenSpan<'_> {
    fn at(start: usize) -> Self {
        Self { start, ..Self::default() }
    }

    fn is_empty(&self) -> bool {
        self.keyword.is_none()
    }

    fn family(&self) -> DefinitionFamily {
        match (self.keyword, self.extend_target) {
            (Some("extend"), Some("schema")) => DefinitionFamily::SchemaExtension,
            (Some("{" | "query" | "mutation" | "subscription" | "fragment"), _) =>
                DefinitionFamily::Executable,
            _ => DefinitionFamily::TypeSystem,
        }
    }

    fn accepts_anonymous_operation(&self) -> bool {
        self.is_empty()
            || self.has_block
            || self.keyword.is_some_and(|kw| BLOCKLESS_KEYWORDS.contains(&kw))
            || (self.keyword == Some("extend")
                && self.extend_target.is_some_and(|kw| BLOCKLESS_KEYWORDS.contains(&kw)))
    }

    fn close(self, end: usize) -> DefinitionSpan {
        DefinitionSpan {
            range: self.start..end,
            family: self.family(),
            keyword_start: self.keyword_start,
            has_block: self.has_block,
        }
    }
}

/// Splits GraphQL text into its top-level definitions without parsing them.
///
/// Only enough of the lexical grammar is recognized to find where one
/// definition ends and the next begins: names, strings, comments, and
/// bracket nesting. Malformed text still splits; the parser reports what is
/// wrong with each piece.
pub(crate) fn definition_spans(source: &str) -> Vec<DefinitionSpan> {
    let bytes = source.as_bytes();
    let mut spans = vec![];
    let mut current = OpenSpan::at(0);
    let mut depth: usize = 0;
    let mut expects_name = false;
    let mut idx = 0;

    while idx < bytes.len() {
        let byte = bytes[idx];
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' | b',' => idx += 1,

            b'#' => {
                idx = bytes[idx..].iter()
                    .position(|&b| b == b'\n' || b == b'\r')
                    .map_or(bytes.len(), |len| idx + len);
            },

            b'"' => {
                if depth == 0 && !current.is_empty() {
                    spans.push(std::mem::replace(&mut current, OpenSpan::at(idx)).close(idx));
                }
                idx = skip_string(bytes, idx);
                expects_name = false;
            },

            b'{' | b'(' | b'[' => {
                if byte == b'{' && depth == 0 && current.accepts_anonymous_operation() {
                    if !current.is_empty() {
                        spans.push(std::mem::replace(&mut current, OpenSpan::at(idx)).close(idx));
                    }
                    if current.is_empty() {
                        current.keyword = Some("{");
                        current.keyword_start = Some(idx);
                    }
                }
                depth += 1;
                expects_name = false;
                idx += 1;
            },

            b'}' | b')' | b']' => {
                depth = depth.saturating_sub(1);
                if byte == b'}' && depth == 0 {
                    current.has_block = true;
                }
                expects_name = false;
                idx += 1;
            },

            b'_' | b'a'..=b'z' | b'A'..=b'Z' => {
                let start = idx;
                idx += bytes[idx..].iter()
                    .position(|&b| !(b == b'_' || b.is_ascii_alphanumeric()))
                    .unwrap_or(bytes.len() - idx);
                let name = &source[start..idx];
                if depth > 0 {
                    expects_name = false;
                    continue;
                }

                if current.keyword == Some("extend") && current.extend_target.is_none() {
                    current.extend_target = Some(name);
                    expects_name = name != "schema";
                } else if DEFINITION_KEYWORDS.contains(&name) && !expects_name {
                    if !current.is_empty() {
                        spans.push(std::mem::replace(&mut current, OpenSpan::at(start)).close(start));
                    }
                    current.keyword = Some(name);
                    current.keyword_start = Some(start);
                    expects_name = name != "extend";
                } else {
                    expects_name = matches!(name, "implements" | "on");
                }
            },

            b'=' | b'|' | b'&' | b'@' | b':' => {
                expects_name = true;
                idx += 1;
            },

            _ => {
                expects_name = false;
                idx += source[idx..].chars().next().map_or(1, char::len_utf8);
            },
        }
    }

    if !current.is_empty() || spans.is_empty() {
        spans.push(current.close(bytes.len()));
    } else if let Some(last) = spans.last_mut() {
        // Trailing comments or a dangling description join the last span.
        last.range.end = bytes.len();
    }
    spans
}

/// Returns the index just past the string literal opening at `start`.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    if bytes[start..].starts_with(b"\"\"\"") {
        let mut idx = start + 3;
        while idx < bytes.len() {
            if bytes[idx..].starts_with(b"\\\"\"\"") {
                idx += 4;
            } else if bytes[idx..].starts_with(b"\"\"\"") {
                return idx + 3;
            } else {
                idx += 1;
            }
        }
        return bytes.len();
    }

    let mut idx = start + 1;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => idx += 2,
            b'"' => return idx + 1,
            b'\n' | b'\r' => return idx,
            _ => idx += 1,
        }
    }
    bytes.len()
}
