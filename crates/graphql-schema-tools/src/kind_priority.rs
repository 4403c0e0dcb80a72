use crate::DefinitionKind;
use indexmap::IndexMap;
use std::sync::OnceLock;

/// An immutable lookup from [`DefinitionKind`] to its rank in document
/// order. Lower ranks sort first.
///
/// [`KindPriority::standard()`] ranks every kind. A table built with
/// [`KindPriority::from_ordered_kinds()`] may leave kinds out; unranked kinds
/// sort after every ranked kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KindPriority {
    ranks: IndexMap<DefinitionKind, usize>,
}

impl KindPriority {
    /// Builds a table that ranks kinds in the order they are yielded. A kind
    /// yielded more than once keeps its first rank.
    pub fn from_ordered_kinds(
        kinds: impl IntoIterator<Item = DefinitionKind>,
    ) -> Self {
        let mut ranks = IndexMap::new();
        for kind in kinds {
            let next_rank = ranks.len();
            ranks.entry(kind).or_insert(next_rank);
        }
        Self { ranks }
    }

    /// The rank of `kind`, or `None` if this table does not rank it.
    pub fn rank(&self, kind: DefinitionKind) -> Option<usize> {
        self.ranks.get(&kind).copied()
    }

    /// The rank used for sorting: unranked kinds sort last.
    pub(crate) fn sort_rank(&self, kind: DefinitionKind) -> usize {
        match self.rank(kind) {
            Some(rank) => rank,
            None => {
                log::debug!("`{kind:?}` is not ranked, sorting it last");
                usize::MAX
            },
        }
    }

    /// The kinds this table ranks, lowest rank first.
    pub fn ranked_kinds(&self) -> impl Iterator<Item = DefinitionKind> + '_ {
        self.ranks.keys().copied()
    }

    /// The canonical table: directive definitions, then type definitions
    /// (scalar, enum, interface, object, union, input), then their
    /// extensions in the same relative order, then the schema definition and
    /// schema extensions, then operation and fragment definitions.
    pub fn standard() -> &'static KindPriority {
        static STANDARD: OnceLock<KindPriority> = OnceLock::new();
        STANDARD.get_or_init(|| {
            KindPriority::from_ordered_kinds(DefinitionKind::ALL)
        })
    }
}

impl Default for KindPriority {
    fn default() -> Self {
        Self::standard().clone()
    }
}
