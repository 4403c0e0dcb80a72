use crate::SourceLocation;
use smallvec::SmallVec;

/// A document that the parser rejected.
///
/// Carries the position(s) the parser reported and the full source text
/// that was being parsed, which is what
/// [`enhance_syntax_error()`](crate::enhance_syntax_error) needs to derive a
/// readable snippet.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    message: String,
    locations: SmallVec<[SourceLocation; 1]>,
    body: Option<String>,
}

impl SyntaxError {
    pub fn new(
        message: impl Into<String>,
        locations: impl IntoIterator<Item = SourceLocation>,
        body: Option<String>,
    ) -> Self {
        Self {
            message: message.into(),
            locations: locations.into_iter().collect(),
            body,
        }
    }

    /// Converts the text of a `graphql_parser` parse error into a structured
    /// error.
    ///
    /// `graphql_parser` formats its errors as
    /// `"<kind> parse error: Parse error at L:C\n<detail>\n<detail>\n"`.
    /// The position becomes the error's only location and the details are
    /// joined into the message. Text without a recognizable position yields
    /// an error with no locations.
    pub(crate) fn from_parser_error(
        err: &impl std::fmt::Display,
        body: &str,
    ) -> Self {
        let raw = err.to_string();
        let Some((_, positioned)) = raw.split_once("Parse error at ") else {
            return Self::new(
                format!("Syntax Error: {}", raw.trim()),
                [],
                Some(body.to_string()),
            );
        };

        let mut lines = positioned.lines();
        let location = lines.next().and_then(parse_position);
        let details = lines
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(strip_token_kinds)
            .collect::<Vec<_>>()
            .join(" ");
        let message =
            if details.is_empty() {
                "Syntax Error".to_string()
            } else {
                format!("Syntax Error: {details}")
            };

        Self::new(message, location, Some(body.to_string()))
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The positions the parser reported, first (primary) position first.
    pub fn locations(&self) -> &[SourceLocation] {
        self.locations.as_slice()
    }

    /// The full source text that failed to parse, if known.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub(crate) fn append_to_message(&mut self, suffix: &str) {
        self.message.push_str(suffix);
    }
}

fn parse_position(text: &str) -> Option<SourceLocation> {
    let (line, column) = text.trim().split_once(':')?;
    Some(SourceLocation::new(line.parse().ok()?, column.parse().ok()?))
}

/// Drops the `[TokenKind]` suffix `graphql_parser` appends to quoted tokens
/// (``Unexpected `)[Punctuator]` `` becomes ``Unexpected `)` ``).
fn strip_token_kinds(detail: &str) -> String {
    let mut out = String::with_capacity(detail.len());
    let mut rest = detail;
    while let Some(end) = rest.find("]`") {
        let head = &rest[..end];
        match head.rfind('[') {
            Some(start)
                if start + 1 < head.len()
                    && head[start + 1..].chars().all(|c| c.is_ascii_alphabetic()) => {
                out.push_str(&head[..start]);
                out.push('`');
            },
            _ => {
                out.push_str(head);
                out.push_str("]`");
            },
        }
        rest = &rest[end + 2..];
    }
    out.push_str(rest);
    out
}
