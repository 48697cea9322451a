//! Per-search visited markers.
//!
//! [`VisitedSet`] is a compact bit vector indexed by [`NodeId`]. Every search allocates its
//! own set, so no visitation state ever outlives a single traversal.

use crate::graph::NodeId;

/// A bit vector recording which nodes a traversal has already entered.
///
/// The set is sized to a graph's [`node_bound`](crate::graph::GraphBase::node_bound).
/// Ids outside of that range are never considered visited and cannot be inserted.
#[derive(Clone, PartialEq, Eq)]
pub struct VisitedSet {
    /// The bits, 64 nodes per word.
    words: Vec<u64>,
    /// Number of addressable node slots.
    bound: usize,
}

impl VisitedSet {
    /// Creates an empty set able to hold node ids below `bound`.
    #[must_use]
    pub fn new(bound: usize) -> Self {
        Self {
            words: vec![0; bound.div_ceil(64)],
            bound,
        }
    }

    /// Marks `node` as visited.
    ///
    /// Returns `true` if the node was not visited before, `false` if it already was or if
    /// it lies outside the addressable range.
    pub fn insert(&mut self, node: NodeId) -> bool {
        let idx = node.index();
        if idx >= self.bound {
            return false;
        }
        let mask = 1u64 << (idx % 64);
        match self.words.get_mut(idx / 64) {
            Some(word) if *word & mask == 0 => {
                *word |= mask;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if `node` has been visited.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        let idx = node.index();
        idx < self.bound
            && self
                .words
                .get(idx / 64)
                .is_some_and(|word| word & (1u64 << (idx % 64)) != 0)
    }

    /// Returns the number of visited nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if no node has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns the visited nodes in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &word)| {
            (0..64usize)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| NodeId::new(word_idx * 64 + bit))
        })
    }
}

impl std::fmt::Debug for VisitedSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_first_visit() {
        let mut visited = VisitedSet::new(10);
        assert!(visited.is_empty());

        assert!(visited.insert(NodeId::new(3)));
        assert!(!visited.insert(NodeId::new(3)));
        assert!(visited.contains(NodeId::new(3)));
        assert!(!visited.contains(NodeId::new(4)));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_out_of_range_ids_are_ignored() {
        let mut visited = VisitedSet::new(4);
        assert!(!visited.insert(NodeId::new(4)));
        assert!(!visited.contains(NodeId::new(100)));
        assert!(visited.is_empty());
    }

    #[test]
    fn test_iter_crosses_word_boundaries() {
        let mut visited = VisitedSet::new(200);
        for idx in [0, 63, 64, 130, 199] {
            visited.insert(NodeId::new(idx));
        }

        let ids: Vec<usize> = visited.iter().map(NodeId::index).collect();
        assert_eq!(ids, vec![0, 63, 64, 130, 199]);
        assert_eq!(visited.len(), 5);
        assert_eq!(format!("{visited:?}"), "{NodeId(0), NodeId(63), NodeId(64), NodeId(130), NodeId(199)}");
    }

    #[test]
    fn test_zero_bound() {
        let mut visited = VisitedSet::new(0);
        assert!(!visited.insert(NodeId::new(0)));
        assert!(visited.is_empty());
    }
}
