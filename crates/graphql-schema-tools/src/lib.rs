//! Canonical forms for GraphQL documents and schemas.
//!
//! [`normalize()`] turns any GraphQL text into a canonical rendition: every
//! pair of inputs that differ only in definition order, child order or
//! formatting comes out byte-identical. [`print_sdl()`] does the same for an
//! already-built [`Schema`], recovering syntax nodes for whatever the schema
//! was built without.

pub mod ast;
mod definition_kind;
mod definition_spans;
mod document;
mod enhance_syntax_error;
mod extract;
mod kind_priority;
mod minify;
mod normalize;
mod ordering;
mod parse;
mod print;
mod print_sdl;
mod schema;
mod source_location;
mod syntax_error;
pub mod types;

pub use definition_kind::DefinitionKind;
pub use document::Definition;
pub use document::Document;
pub use enhance_syntax_error::enhance_syntax_error;
pub use extract::extract_document;
pub use extract::merge_extensions;
pub use extract::synthesize_node;
pub use extract::ExtractError;
pub use extract::ExtractOptions;
pub use extract::FieldFilter;
pub use extract::FieldNodeRef;
pub use extract::NodeFilter;
pub use kind_priority::KindPriority;
pub use minify::minify;
pub use normalize::normalize;
pub use normalize::normalize_bytes;
pub use normalize::InputError;
pub use normalize::NormalizationResult;
pub use normalize::NormalizeOptions;
pub use ordering::sort_document;
pub use ordering::DefinitionSorter;
pub use parse::parse;
pub use print::print;
pub use print_sdl::print_sdl;
pub use print_sdl::PrintSdlOptions;
pub use schema::is_builtin_directive_name;
pub use schema::is_builtin_type_name;
pub use schema::Schema;
pub use schema::RootOperation;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use schema::SchemaConfig;
pub use schema::SchemaReflection;
pub use source_location::SourceLocation;
pub use syntax_error::SyntaxError;

#[cfg(test)]
mod tests;
