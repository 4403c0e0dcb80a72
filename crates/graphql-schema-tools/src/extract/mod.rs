//! Recovering a printable [`Document`](crate::Document) from a live schema.

mod extract_document;
mod extract_error;
mod extract_options;
mod field_filter;
mod merge_extensions;
mod node_filter;
mod synthesize;

pub use extract_document::extract_document;
pub use extract_error::ExtractError;
pub use extract_options::ExtractOptions;
pub use field_filter::FieldFilter;
pub use field_filter::FieldNodeRef;
pub use merge_extensions::merge_extensions;
pub use node_filter::NodeFilter;
pub use synthesize::synthesize_node;

#[cfg(test)]
mod tests;
