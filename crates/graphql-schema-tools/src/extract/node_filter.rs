use crate::ast::NamedNode;
use std::collections::HashSet;
use std::fmt;

/// Decides which extracted nodes to keep.
pub enum NodeFilter<'a, N> {
    /// Drops every node whose name is in the set.
    ExcludeNames(HashSet<String>),

    /// Keeps exactly the nodes for which the predicate returns `true`.
    Predicate(Box<dyn Fn(&N) -> bool + 'a>),
}

impl<'a, N: NamedNode> NodeFilter<'a, N> {
    pub fn exclude_names<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::ExcludeNames(names.into_iter().map(Into::into).collect())
    }

    pub fn predicate(predicate: impl Fn(&N) -> bool + 'a) -> Self {
        Self::Predicate(Box::new(predicate))
    }

    pub fn keeps(&self, node: &N) -> bool {
        match self {
            Self::ExcludeNames(names) => !names.contains(node.node_name()),
            Self::Predicate(predicate) => predicate(node),
        }
    }
}

impl<N> Default for NodeFilter<'_, N> {
    fn default() -> Self {
        Self::ExcludeNames(HashSet::new())
    }
}

impl<N> fmt::Debug for NodeFilter<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExcludeNames(names) =>
                f.debug_tuple("ExcludeNames").field(names).finish(),
            Self::Predicate(_) =>
                f.debug_tuple("Predicate").field(&"<fn>").finish(),
        }
    }
}
