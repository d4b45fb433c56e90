//! Frontier entries of the best-first search.

use std::cmp::Ordering;

use super::heuristic::potential_bound;
use crate::automaton::{Origin, StateId, ROOT};

/// Deduplication key. Deliberately excludes `length`.
pub(crate) type VisitKey = (StateId, usize, usize, Origin);

/// A candidate partial match waiting in the priority queue.
///
/// Never mutated once queued; expansion creates new nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchNode {
    pub(crate) potential: usize,
    pub(crate) length: usize,
    pub(crate) mismatches: usize,
    pub(crate) state: StateId,
    /// Next position to compare in the origin sequence.
    pub(crate) cursor: usize,
    /// Position in the origin sequence where this path started.
    pub(crate) anchor: usize,
    pub(crate) origin: Origin,
}

impl SearchNode {
    /// Root node tracking `origin` from its first symbol.
    pub(crate) fn seed(origin: Origin, max_possible_length: usize) -> Self {
        Self {
            potential: potential_bound(0, max_possible_length),
            length: 0,
            mismatches: 0,
            state: ROOT,
            cursor: 0,
            anchor: 0,
            origin,
        }
    }

    /// Node one symbol further along the edge to `state`.
    pub(crate) fn child(
        &self,
        state: StateId,
        mismatches: usize,
        max_possible_length: usize,
    ) -> Self {
        let length = self.length + 1;
        Self {
            potential: potential_bound(length, max_possible_length),
            length,
            mismatches,
            state,
            cursor: self.cursor + 1,
            anchor: self.anchor,
            origin: self.origin,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> VisitKey {
        (self.state, self.mismatches, self.cursor, self.origin)
    }
}

/// Max-heap order: larger potential first, then longer paths. The remaining
/// fields break ties so that the pop order is total.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.potential
            .cmp(&other.potential)
            .then_with(|| self.length.cmp(&other.length))
            .then_with(|| other.mismatches.cmp(&self.mismatches))
            .then_with(|| other.state.cmp(&self.state))
            .then_with(|| other.cursor.cmp(&self.cursor))
            .then_with(|| other.anchor.cmp(&self.anchor))
            .then_with(|| other.origin.cmp(&self.origin))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_seed() {
        let node = SearchNode::seed(Origin::Second, 7);
        assert_eq!(node.potential, 7);
        assert_eq!(node.length, 0);
        assert_eq!(node.key(), (ROOT, 0, 0, Origin::Second));
    }

    #[test]
    fn test_child_advances_cursor() {
        let seed = SearchNode::seed(Origin::First, 4);
        let child = seed.child(3, 1, 4);
        assert_eq!(child.length, 1);
        assert_eq!(child.cursor, 1);
        assert_eq!(child.anchor, 0);
        assert_eq!(child.mismatches, 1);
        assert_eq!(child.potential, 4);
        assert_eq!(child.origin, Origin::First);
    }

    #[test]
    fn test_longer_pops_first() {
        let seed = SearchNode::seed(Origin::First, 4);
        let short = seed.child(1, 0, 4);
        let long = short.child(2, 0, 4);

        let mut heap = BinaryHeap::from(vec![seed, long, short]);
        assert_eq!(heap.pop().map(|n| n.length), Some(2));
        assert_eq!(heap.pop().map(|n| n.length), Some(1));
        assert_eq!(heap.pop().map(|n| n.length), Some(0));
    }

    #[test]
    fn test_fewer_mismatches_break_ties() {
        let seed = SearchNode::seed(Origin::First, 4);
        let clean = seed.child(5, 0, 4);
        let dirty = seed.child(1, 1, 4);
        assert!(clean > dirty);
    }

    #[test]
    fn test_first_origin_breaks_final_tie() {
        let first = SearchNode::seed(Origin::First, 4);
        let second = SearchNode::seed(Origin::Second, 4);
        assert!(first > second);
    }
}
