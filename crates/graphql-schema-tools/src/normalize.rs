use crate::enhance_syntax_error;
use crate::minify;
use crate::parse;
use crate::print;
use crate::DefinitionSorter;
use crate::Document;
use crate::KindPriority;
use crate::SyntaxError;

/// Options for [`normalize()`].
#[derive(Clone, Debug, Default)]
pub struct NormalizeOptions {
    /// Collapse the canonical output with [`minify()`].
    pub minify: bool,

    /// Kind ranking used to order top-level definitions. Defaults to
    /// [`KindPriority::standard()`].
    pub kind_priority: KindPriority,
}

impl NormalizeOptions {
    pub fn minified() -> Self {
        Self {
            minify: true,
            ..Self::default()
        }
    }
}

/// The outcome of [`normalize()`].
///
/// On success `source` holds the canonical text and `error` is `None`. On a
/// syntax error `source` holds the original, unmodified input and `error`
/// holds the enhanced error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizationResult {
    pub source: String,
    pub error: Option<SyntaxError>,
}

impl NormalizationResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<String, SyntaxError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.source),
        }
    }
}

/// Input that [`normalize_bytes()`] refuses before any parsing.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("`normalize` expected UTF-8 text")]
    NotText(#[from] std::str::Utf8Error),
}

/// Canonicalizes a GraphQL document.
///
/// Parses `source`, orders its definitions and their nested collections,
/// and prints the result (minified if requested). Any two texts that parse
/// to structurally equivalent documents normalize to byte-identical output,
/// and normalizing normalized output is a no-op.
///
/// Syntax errors never escape as `Err`: they come back in
/// [`NormalizationResult::error`], enhanced with a snippet of the offending
/// text.
///
/// ```
/// use graphql_schema_tools::normalize;
/// use graphql_schema_tools::NormalizeOptions;
///
/// let result = normalize(
///     "type B { id: ID! } type A { name: String! }",
///     &NormalizeOptions::default(),
/// );
/// assert_eq!(
///     result.source,
///     "type A {\n  name: String!\n}\n\ntype B {\n  id: ID!\n}\n",
/// );
/// ```
pub fn normalize(source: &str, options: &NormalizeOptions) -> NormalizationResult {
    let document = match parse(source) {
        Ok(document) => document,
        Err(err) => {
            log::debug!("Normalization stopped on a syntax error: {err}");
            return NormalizationResult {
                source: source.to_string(),
                error: Some(enhance_syntax_error(err)),
            };
        },
    };

    let sorter = DefinitionSorter::new(&options.kind_priority);
    let printed = print(&Document::new(sorter.sort(document.definitions)));
    NormalizationResult {
        source: if options.minify { minify(&printed) } else { printed },
        error: None,
    }
}

/// Like [`normalize()`], but for raw bytes. Bytes that are not UTF-8 text
/// fail immediately with [`InputError::NotText`].
pub fn normalize_bytes(
    source: &[u8],
    options: &NormalizeOptions,
) -> Result<NormalizationResult, InputError> {
    let source = std::str::from_utf8(source)?;
    Ok(normalize(source, options))
}
