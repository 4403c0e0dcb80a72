use crate::minify;
use crate::SyntaxError;

/// Appends a short, formatting-independent snippet of the source text
/// around the error's primary location to its message:
///
/// ```text
/// Syntax Error: Unexpected `)` Expected `Name` Found near: `Query { foo(): String`.
/// ```
///
/// The snippet is the last minified token before the error joined with the
/// offending token of the minified text that follows it. Both halves are
/// taken from minified text and neither stops at a line break, so two inputs
/// that differ only in whitespace produce the same snippet.
///
/// Errors without a location or without source text are returned unchanged.
pub fn enhance_syntax_error(mut error: SyntaxError) -> SyntaxError {
    let Some(location) = error.locations().first().copied() else {
        return error;
    };
    let Some(body) = error.body() else {
        return error;
    };

    let offset = location.byte_offset_in(body);
    let (before, after) = body.split_at(offset);

    let minified_before = minify(before);
    let tail = minified_before.split(' ').next_back().unwrap_or("");
    let minified_after = minify(after);
    let head = offending_token(&minified_after);

    // Two name characters only meet at a location if something separated
    // them in the source.
    let is_name_char = |c: char| c == '_' || c.is_alphanumeric();
    let separator =
        if tail.ends_with(is_name_char) && head.starts_with(is_name_char) {
            " "
        } else {
            ""
        };
    let snippet = readable_snippet(&minify(&format!("{tail}{separator}{head}")));
    log::trace!("Derived snippet `{snippet}` for syntax error at {location}.");

    error.append_to_message(&format!(" Found near: `{snippet}`."));
    error
}

/// The leading token of minified text: a lone brace, or everything up to the
/// next brace or space.
fn offending_token(minified: &str) -> &str {
    let is_brace = |c: char| c == '{' || c == '}';
    match minified.chars().next() {
        None => "",
        Some(first) if is_brace(first) => &minified[..first.len_utf8()],
        Some(_) => {
            let end = minified
                .find(|c: char| is_brace(c) || c == ' ')
                .unwrap_or(minified.len());
            &minified[..end]
        },
    }
}

/// Re-inserts conventional spacing around `:`, `{` and `}`.
fn readable_snippet(minified: &str) -> String {
    minified
        .replace(':', ": ")
        .replace('{', " { ")
        .replace('}', " } ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
