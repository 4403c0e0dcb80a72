use crate::extract_document;
use crate::minify;
use crate::print;
use crate::ExtractError;
use crate::ExtractOptions;
use crate::SchemaReflection;

/// Options for [`print_sdl()`].
#[derive(Debug, Default)]
pub struct PrintSdlOptions<'a> {
    pub extract: ExtractOptions<'a>,

    /// Collapse the printed SDL with [`minify()`].
    pub minify: bool,
}

/// Prints the canonical SDL of a live schema's non-built-in types and
/// directives.
///
/// ```
/// use graphql_schema_tools::print_sdl;
/// use graphql_schema_tools::PrintSdlOptions;
/// use graphql_schema_tools::Schema;
///
/// let schema = Schema::from_sdl("type Query { b: Int a: String }").unwrap();
/// let sdl = print_sdl(&schema, &PrintSdlOptions::default()).unwrap();
/// assert_eq!(sdl, "type Query {\n  a: String\n  b: Int\n}\n");
/// ```
pub fn print_sdl(
    schema: &impl SchemaReflection,
    options: &PrintSdlOptions<'_>,
) -> Result<String, ExtractError> {
    let document = extract_document(schema, &options.extract)?;
    let sdl = print(&document);
    if options.minify {
        Ok(minify(sdl.as_str()))
    } else {
        Ok(sdl)
    }
}
