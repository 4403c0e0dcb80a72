use crate::types::Directive;
use crate::types::NamedType;

/// A snapshot of a schema's named types and directives, borrowed from the
/// schema it describes.
#[derive(Clone, Debug, Default)]
pub struct SchemaConfig<'a> {
    pub directives: Vec<&'a Directive>,
    pub types: Vec<&'a NamedType>,
}

/// Read access to an already-built schema's contents.
///
/// [`extract_document()`](crate::extract_document) and
/// [`print_sdl()`](crate::print_sdl) only ever see a schema through this
/// trait.
pub trait SchemaReflection {
    fn to_config(&self) -> SchemaConfig<'_>;
}
