use crate::ast;
use crate::extract::FieldFilter;
use crate::extract::NodeFilter;

/// Options for [`extract_document()`](crate::extract_document).
///
/// The default keeps everything.
#[derive(Debug, Default)]
pub struct ExtractOptions<'a> {
    pub filter_directives: NodeFilter<'a, ast::schema::DirectiveDefinition>,
    pub filter_fields: FieldFilter<'a>,
    pub filter_types: NodeFilter<'a, ast::schema::TypeDefinition>,
}
