use crate::ast;
use std::collections::HashSet;
use std::fmt;

/// A field node of either an output type (object or interface) or an input
/// object type.
#[derive(Clone, Copy, Debug)]
pub enum FieldNodeRef<'n> {
    Field(&'n ast::schema::Field),
    InputValue(&'n ast::schema::InputValue),
}

impl FieldNodeRef<'_> {
    pub fn name(&self) -> &str {
        match self {
            Self::Field(field) => field.name.as_str(),
            Self::InputValue(input_value) => input_value.name.as_str(),
        }
    }
}

/// Decides which fields of an extracted type to keep.
///
/// Predicates see the field node and the type node that owns it.
pub enum FieldFilter<'a> {
    /// Drops every field whose name is in the set, on any type.
    ExcludeNames(HashSet<String>),

    /// Keeps exactly the fields for which the predicate returns `true`.
    Predicate(
        Box<dyn Fn(FieldNodeRef<'_>, &ast::schema::TypeDefinition) -> bool + 'a>,
    ),
}

impl<'a> FieldFilter<'a> {
    pub fn exclude_names<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::ExcludeNames(names.into_iter().map(Into::into).collect())
    }

    pub fn predicate(
        predicate: impl Fn(FieldNodeRef<'_>, &ast::schema::TypeDefinition) -> bool + 'a,
    ) -> Self {
        Self::Predicate(Box::new(predicate))
    }

    pub fn keeps(
        &self,
        field: FieldNodeRef<'_>,
        owner: &ast::schema::TypeDefinition,
    ) -> bool {
        match self {
            Self::ExcludeNames(names) => !names.contains(field.name()),
            Self::Predicate(predicate) => predicate(field, owner),
        }
    }
}

impl Default for FieldFilter<'_> {
    fn default() -> Self {
        Self::ExcludeNames(HashSet::new())
    }
}

impl fmt::Debug for FieldFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExcludeNames(names) =>
                f.debug_tuple("ExcludeNames").field(names).finish(),
            Self::Predicate(_) =>
                f.debug_tuple("Predicate").field(&"<fn>").finish(),
        }
    }
}
