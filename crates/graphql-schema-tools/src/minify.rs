/// Punctuators that never need surrounding whitespace.
const TIGHT_PUNCTUATORS: [char; 4] = ['{', '}', ':', ','];

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{feff}')
}

fn is_tight(c: char) -> bool {
    TIGHT_PUNCTUATORS.contains(&c)
}

/// Collapses a GraphQL document onto as few characters as possible while
/// keeping it parseable to the same AST.
///
/// Runs of whitespace become a single space, and that space is dropped
/// entirely next to `{`, `}`, `:` or `,`. Comments are removed. String and
/// block-string literals are copied verbatim.
///
/// Minifying already-minified text returns it unchanged.
///
/// ```
/// use graphql_schema_tools::minify;
///
/// assert_eq!(minify("type Foo {\n  id: ID!\n}"), "type Foo{id:ID!}");
/// ```
pub fn minify(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut pending_space = false;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if is_whitespace(c) {
            pending_space = true;
            continue;
        }

        if c == '#' {
            while chars.next_if(|&next| next != '\n' && next != '\r').is_some() {}
            pending_space = true;
            continue;
        }

        if pending_space {
            pending_space = false;
            let after_tight = out.chars().next_back().is_none_or(is_tight);
            if !after_tight && !is_tight(c) {
                out.push(' ');
            }
        }

        out.push(c);
        if c == '"' {
            copy_string_literal(&mut chars, &mut out);
        }
    }

    out
}

/// Copies the remainder of a string literal whose opening `"` has already
/// been written to `out`.
fn copy_string_literal(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    out: &mut String,
) {
    if chars.peek() == Some(&'"') {
        out.push('"');
        chars.next();
        if chars.peek() == Some(&'"') {
            out.push('"');
            chars.next();
            copy_block_string_body(chars, out);
        }
        // Otherwise this was the empty string `""`.
        return;
    }

    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            },
            '"' | '\n' | '\r' => return,
            _ => (),
        }
    }
}

fn copy_block_string_body(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    out: &mut String,
) {
    let mut quote_run = 0;
    let mut escaped_quotes = 0;
    let mut after_backslash = false;
    for c in chars.by_ref() {
        out.push(c);
        if c == '"' {
            // `\"""` escapes a triple quote inside a block string.
            if after_backslash {
                after_backslash = false;
                escaped_quotes = 2;
            } else if escaped_quotes > 0 {
                escaped_quotes -= 1;
            } else {
                quote_run += 1;
                if quote_run == 3 {
                    return;
                }
            }
            continue;
        }
        after_backslash = c == '\\';
        escaped_quotes = 0;
        quote_run = 0;
    }
}
