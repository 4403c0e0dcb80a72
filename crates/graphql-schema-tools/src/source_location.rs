/// A 1-based line/column position within a source text.
///
/// Columns count characters, not bytes, matching the positions
/// `graphql_parser` reports.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The byte offset of this location within `body`, clamped to the end of
    /// the referenced line (or of `body` if the line does not exist).
    pub fn byte_offset_in(&self, body: &str) -> usize {
        let mut line_start = 0;
        for _ in 1..self.line {
            match body[line_start..].find('\n') {
                Some(idx) => line_start += idx + 1,
                None => return body.len(),
            }
        }
        let line_end = body[line_start..]
            .find('\n')
            .map(|idx| line_start + idx)
            .unwrap_or(body.len());
        body[line_start..line_end]
            .char_indices()
            .nth(self.column.saturating_sub(1))
            .map(|(idx, _)| line_start + idx)
            .unwrap_or(line_end)
    }
}

impl From<graphql_parser::Pos> for SourceLocation {
    fn from(pos: graphql_parser::Pos) -> Self {
        Self::new(pos.line, pos.column)
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
