use crate::ordering::SortChildren;
use crate::Definition;
use crate::KindPriority;
use std::cmp::Ordering;

/// Orders definitions according to a [`KindPriority`] table.
#[derive(Clone, Copy, Debug)]
pub struct DefinitionSorter<'a> {
    priority: &'a KindPriority,
}

impl<'a> DefinitionSorter<'a> {
    pub fn new(priority: &'a KindPriority) -> Self {
        Self { priority }
    }

    /// Total order over two definitions: kind rank first, then name for
    /// kinds that are ordered by name.
    ///
    /// Definitions that compare [`Ordering::Equal`] keep their input order
    /// when sorted with [`DefinitionSorter::sort()`].
    pub fn compare(&self, a: &Definition, b: &Definition) -> Ordering {
        let a_kind = a.kind();
        let b_kind = b.kind();
        self.priority.sort_rank(a_kind)
            .cmp(&self.priority.sort_rank(b_kind))
            .then_with(|| a_kind.cmp(&b_kind))
            .then_with(|| match (a.name(), b.name()) {
                (Some(a_name), Some(b_name)) if a_kind.is_ordered_by_name() =>
                    a_name.cmp(b_name),
                _ => Ordering::Equal,
            })
    }

    /// Returns the definitions in canonical order, each with its child
    /// collections put into canonical order.
    pub fn sort(
        &self,
        definitions: impl IntoIterator<Item = Definition>,
    ) -> Vec<Definition> {
        let mut definitions: Vec<Definition> = definitions.into_iter()
            .map(|mut def| {
                def.sort_children();
                def
            })
            .collect();
        definitions.sort_by(|a, b| self.compare(a, b));
        log::trace!("Sorted {} definitions.", definitions.len());
        definitions
    }
}

/// Puts `definitions` into canonical document order using
/// [`KindPriority::standard()`].
///
/// Sorting is idempotent: sorting an already-sorted list yields an equal
/// list.
pub fn sort_document(
    definitions: impl IntoIterator<Item = Definition>,
) -> Vec<Definition> {
    DefinitionSorter::new(KindPriority::standard()).sort(definitions)
}
