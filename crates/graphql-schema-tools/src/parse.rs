use crate::definition_spans::definition_spans;
use crate::definition_spans::DefinitionFamily;
use crate::definition_spans::DefinitionSpan;
use crate::Definition;
use crate::Document;
use crate::SourceLocation;
use crate::SyntaxError;

/// Parses a GraphQL document.
///
/// The text is parsed as a type-system document first and as an executable
/// document second. When neither grammar accepts the whole text but it
/// holds definitions of both families (or an `extend schema`), each run of
/// same-family definitions is parsed with its own grammar and the results
/// are concatenated in source order.
///
/// Otherwise the error whose location lies furthest into the text is
/// returned: that is the grammar which made the most progress, and so the
/// one the author most likely meant.
pub fn parse(source: &str) -> Result<Document, SyntaxError> {
    let schema_err = match graphql_parser::parse_schema::<String>(source) {
        Ok(doc) => return Ok(doc.into_static().into()),
        Err(err) => SyntaxError::from_parser_error(&err, source),
    };

    log::trace!(
        "Source did not parse as a type-system document ({schema_err}), \
        retrying as an executable document.",
    );
    let query_err = match graphql_parser::parse_query::<String>(source) {
        Ok(doc) => return Ok(doc.into_static().into()),
        Err(err) => SyntaxError::from_parser_error(&err, source),
    };

    let spans = definition_spans(source);
    let is_mixed = spans.iter().any(|span| span.family != spans[0].family)
        || spans.iter().any(|span| span.family == DefinitionFamily::SchemaExtension);
    if is_mixed {
        log::trace!("Parsing {} definitions as a mixed document.", spans.len());
        return parse_mixed(source, &spans);
    }

    if query_err.locations().first() > schema_err.locations().first() {
        Err(query_err)
    } else {
        Err(schema_err)
    }
}

fn parse_mixed(
    source: &str,
    spans: &[DefinitionSpan],
) -> Result<Document, SyntaxError> {
    let mut definitions = vec![];
    let mut remaining = spans;

    while let Some(first) = remaining.first() {
        let run_len = match first.family {
            DefinitionFamily::SchemaExtension => 1,
            family => remaining.iter()
                .take_while(|span| span.family == family)
                .count(),
        };
        let (run, rest) = remaining.split_at(run_len);
        remaining = rest;

        let range = first.range.start..run[run_len - 1].range.end;
        match first.family {
            DefinitionFamily::TypeSystem => {
                let text = positioned_slice(source, range);
                let doc = graphql_parser::parse_schema::<String>(&text)
                    .map_err(|err| SyntaxError::from_parser_error(&err, source))?;
                definitions.extend(
                    doc.into_static().definitions.into_iter().map(Definition::TypeSystem),
                );
            },
            DefinitionFamily::Executable => {
                let text = positioned_slice(source, range);
                let doc = graphql_parser::parse_query::<String>(&text)
                    .map_err(|err| SyntaxError::from_parser_error(&err, source))?;
                definitions.extend(
                    doc.into_static().definitions.into_iter().map(Definition::Executable),
                );
            },
            DefinitionFamily::SchemaExtension =>
                definitions.push(parse_schema_extension(source, first)?),
        }
    }

    Ok(Document::new(definitions))
}

/// Parses `extend schema ...` by blanking out `extend` and reading the rest
/// as a schema definition, so reported positions still match `source`.
fn parse_schema_extension(
    source: &str,
    span: &DefinitionSpan,
) -> Result<Definition, SyntaxError> {
    let keyword_start = span.keyword_start.unwrap_or(span.range.start);
    let mut text = positioned_slice(source, span.range.start..keyword_start);
    text.push_str("      ");
    text.push_str(&source[keyword_start + "extend".len()..span.range.end]);
    if !span.has_block {
        text.push_str(" {}");
    }

    let doc = graphql_parser::parse_schema::<String>(&text)
        .map_err(|err| SyntaxError::from_parser_error(&err, source))?
        .into_static();
    let extension = doc.definitions.into_iter().find_map(|def| match def {
        graphql_parser::schema::Definition::SchemaDefinition(def) => Some(def),
        _ => None,
    });

    match extension {
        Some(ext)
            if !ext.directives.is_empty()
                || ext.query.is_some()
                || ext.mutation.is_some()
                || ext.subscription.is_some() => Ok(Definition::SchemaExtension(ext)),
        _ => {
            let location = location_of(source, keyword_start);
            Err(SyntaxError::new(
                "Syntax Error: Schema extension must add directives or operation types",
                [location],
                Some(source.to_string()),
            ))
        },
    }
}

/// `source[range]` preceded by blanks that keep every line and column where
/// it was in `source`.
fn positioned_slice(source: &str, range: std::ops::Range<usize>) -> String {
    let mut text: String = source[..range.start].chars()
        .map(|c| if c == '\n' || c == '\r' { c } else { ' ' })
        .collect();
    text.push_str(&source[range]);
    text
}

fn location_of(source: &str, offset: usize) -> SourceLocation {
    let before = &source[..offset];
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    SourceLocation::new(
        before.matches('\n').count() + 1,
        before[line_start..].chars().count() + 1,
    )
}
