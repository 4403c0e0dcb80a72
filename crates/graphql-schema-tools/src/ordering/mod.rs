//! Canonical ordering of documents.
//!
//! Top-level definitions are grouped by [`DefinitionKind`](crate::DefinitionKind)
//! rank and then ordered by name. Every orderable child collection
//! (`fields`, `directives`, `arguments`, `values`, union member `types`,
//! implemented `interfaces`, and directive `locations`) is ordered
//! recursively. Everything else passes through untouched.

mod sort_children;
mod sort_document;

pub(crate) use sort_children::SortChildren;
pub use sort_document::DefinitionSorter;
pub use sort_document::sort_document;

#[cfg(test)]
mod tests;
