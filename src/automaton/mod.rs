//! Suffix automaton over a pair of sequences.
//!
//! A **suffix automaton** is the minimal DFA recognizing every suffix of a
//! text, which means every path from the root spells a distinct substring.
//! This module builds one over `first + Separator + second` so that the
//! search can walk every substring of both inputs from a single root.
//!
//! # Properties
//!
//! - **Substring Recognition**: any path from root represents a substring
//! - **Minimality**: at most 2n-1 states for n ≥ 2 letters
//! - **Online Construction**: O(1) amortized per letter
//! - **Endpos Equivalence**: states group substrings by ending positions
//!
//! # Example
//!
//! ```rust
//! use kmismatch::automaton::{Origin, SuffixAutomaton};
//!
//! let first: Vec<char> = "abc".chars().collect();
//! let second: Vec<char> = "bcd".chars().collect();
//! let automaton = SuffixAutomaton::from_pair(&first, &second);
//!
//! let bc = automaton.walk(&['b', 'c']).unwrap();
//! assert!(automaton.state(bc).sources().includes(Origin::First));
//! assert!(automaton.state(bc).sources().includes(Origin::Second));
//! assert!(!automaton.contains(&['c', 'b']));
//! ```
//!
//! # References
//!
//! - Blumer et al. (1985): "The smallest automaton recognizing the subwords of a text"

mod sources;

pub use sources::{Origin, Sources};

use std::cmp::Reverse;

use log::debug;
use smallvec::SmallVec;

use crate::symbol::{Letter, Symbol};

/// Index of a state in the automaton.
pub type StateId = usize;

/// The root state. Always present, always index 0.
pub const ROOT: StateId = 0;

/// Edges kept inline before spilling to the heap.
const INLINE_EDGES: usize = 4;

/// Fan-out above which edge lookup switches from linear to binary search.
const LINEAR_SEARCH_LIMIT: usize = 16;

/// A state in the suffix automaton.
///
/// Each state represents an equivalence class of substrings that have the same
/// set of ending positions (endpos).
#[derive(Clone, Debug)]
pub struct AutomatonState<S> {
    /// Outgoing edges, sorted by label.
    edges: SmallVec<[(Letter<S>, StateId); INLINE_EDGES]>,

    /// Points to the state of the longest proper suffix in a different
    /// endpos class. `None` only for the root.
    suffix_link: Option<StateId>,

    /// Length of the longest string in this equivalence class.
    ///
    /// All strings in this class have lengths in the range
    /// `[states[suffix_link].length + 1, length]`.
    length: usize,

    /// Inputs in which the substrings of this state occur.
    sources: Sources,
}

impl<S: Symbol> AutomatonState<S> {
    fn root() -> Self {
        Self::new(0)
    }

    fn new(length: usize) -> Self {
        Self {
            edges: SmallVec::new(),
            suffix_link: None,
            length,
            sources: Sources::NONE,
        }
    }

    /// Length of the longest substring ending at this state.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Suffix link, `None` for the root.
    #[inline]
    pub fn suffix_link(&self) -> Option<StateId> {
        self.suffix_link
    }

    /// Inputs containing this state's substrings.
    ///
    /// Only meaningful for automata built with [`SuffixAutomaton::from_pair`].
    #[inline]
    pub fn sources(&self) -> Sources {
        self.sources
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Outgoing edges in label order.
    pub fn edges(&self) -> impl Iterator<Item = (Letter<S>, StateId)> + '_ {
        self.edges.iter().copied()
    }

    /// Find an edge by label.
    ///
    /// Uses linear search for small edge counts, binary search for larger.
    fn find_edge(&self, label: Letter<S>) -> Option<StateId> {
        if self.edges.len() < LINEAR_SEARCH_LIMIT {
            self.edges
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, t)| *t)
        } else {
            self.edges
                .binary_search_by_key(&label, |(l, _)| *l)
                .ok()
                .map(|idx| self.edges[idx].1)
        }
    }

    /// Add or retarget an edge, keeping labels sorted.
    fn set_edge(&mut self, label: Letter<S>, target: StateId) {
        match self.edges.binary_search_by_key(&label, |(l, _)| *l) {
            Ok(idx) => self.edges[idx].1 = target,
            Err(idx) => self.edges.insert(idx, (label, target)),
        }
    }
}

/// Suffix automaton with online construction.
///
/// Built once per search and dropped afterwards; there is no removal or
/// compaction.
#[derive(Clone, Debug)]
pub struct SuffixAutomaton<S> {
    /// State storage. State 0 is the root; states are appended in creation
    /// order, so the index space is dense.
    states: Vec<AutomatonState<S>>,

    /// State created by the most recent [`extend`](Self::extend).
    last: StateId,
}

impl<S: Symbol> SuffixAutomaton<S> {
    /// Create an automaton containing only the root.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an empty automaton with room for `states` states.
    pub fn with_capacity(states: usize) -> Self {
        let mut v = Vec::with_capacity(states.max(1));
        v.push(AutomatonState::root());
        Self { states: v, last: ROOT }
    }

    /// Build an automaton recognizing every substring of `sequence`.
    pub fn from_sequence(sequence: &[S]) -> Self {
        let mut automaton = Self::with_capacity(2 * sequence.len());
        automaton.build(sequence);
        automaton
    }

    /// Build the automaton of `first + Separator + second` and record, for
    /// every state, which of the two inputs its substrings occur in.
    pub fn from_pair(first: &[S], second: &[S]) -> Self {
        let total = first.len() + second.len() + 1;
        let mut automaton = Self::with_capacity(2 * total);

        for &symbol in first {
            automaton.extend(Letter::Symbol(symbol));
            automaton.states[automaton.last].sources = Sources::FIRST;
        }
        automaton.extend(Letter::Separator);
        for &symbol in second {
            automaton.extend(Letter::Symbol(symbol));
            automaton.states[automaton.last].sources = Sources::SECOND;
        }
        automaton.propagate_sources();

        debug!(
            "built suffix automaton: {} + 1 + {} letters, {} states",
            first.len(),
            second.len(),
            automaton.states.len()
        );
        automaton
    }

    /// Extend the automaton with every symbol of `sequence`, in order.
    pub fn build(&mut self, sequence: &[S]) {
        for &symbol in sequence {
            self.extend(Letter::Symbol(symbol));
        }
    }

    /// Extend the automaton with one letter (online construction).
    ///
    /// # Complexity
    ///
    /// - Time: O(1) amortized per letter
    /// - Space: adds 1 state, possibly 1 clone
    pub fn extend(&mut self, letter: Letter<S>) {
        let cur = self.states.len();
        self.states
            .push(AutomatonState::new(self.states[self.last].length + 1));

        // Walk suffix links backward, adding transitions to the new state
        let mut p = Some(self.last);
        let mut found = None;
        while let Some(p_idx) = p {
            if let Some(q) = self.states[p_idx].find_edge(letter) {
                found = Some((p_idx, q));
                break;
            }
            self.states[p_idx].set_edge(letter, cur);
            p = self.states[p_idx].suffix_link;
        }

        match found {
            None => self.states[cur].suffix_link = Some(ROOT),
            Some((p_idx, q)) if self.states[p_idx].length + 1 == self.states[q].length => {
                self.states[cur].suffix_link = Some(q);
            }
            Some((p_idx, q)) => {
                // Split the class of q
                let clone = self.states.len();
                let mut cloned = self.states[q].clone();
                cloned.length = self.states[p_idx].length + 1;
                cloned.sources = Sources::NONE;
                self.states.push(cloned);

                self.states[q].suffix_link = Some(clone);
                self.states[cur].suffix_link = Some(clone);

                let mut p2 = Some(p_idx);
                while let Some(p2_idx) = p2 {
                    if self.states[p2_idx].find_edge(letter) != Some(q) {
                        break;
                    }
                    self.states[p2_idx].set_edge(letter, clone);
                    p2 = self.states[p2_idx].suffix_link;
                }
            }
        }

        self.last = cur;
    }

    /// OR every state's sources into its suffix link, longest states first,
    /// so each state ends up with the union over its suffix-link subtree.
    fn propagate_sources(&mut self) {
        let mut order: Vec<StateId> = (1..self.states.len()).collect();
        order.sort_unstable_by_key(|&id| Reverse(self.states[id].length));

        for id in order {
            if let Some(link) = self.states[id].suffix_link {
                let sources = self.states[id].sources;
                self.states[link].sources |= sources;
            }
        }
    }

    /// Number of states, root included.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// True if nothing has been added yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.len() == 1
    }

    /// The root state id.
    #[inline]
    pub fn root(&self) -> StateId {
        ROOT
    }

    /// State created by the most recent extension.
    #[inline]
    pub fn last(&self) -> StateId {
        self.last
    }

    /// Access a state by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[inline]
    pub fn state(&self, id: StateId) -> &AutomatonState<S> {
        &self.states[id]
    }

    /// All states in creation order.
    pub fn states(&self) -> &[AutomatonState<S>] {
        &self.states
    }

    /// Follow the edge labeled `letter` out of `state`.
    #[inline]
    pub fn transition(&self, state: StateId, letter: Letter<S>) -> Option<StateId> {
        self.states[state].find_edge(letter)
    }

    /// Outgoing edges of `state` in label order.
    pub fn edges(&self, state: StateId) -> impl Iterator<Item = (Letter<S>, StateId)> + '_ {
        self.states[state].edges()
    }

    /// State reached from the root by spelling `path`, if any.
    pub fn walk(&self, path: &[S]) -> Option<StateId> {
        path.iter().try_fold(ROOT, |state, &symbol| {
            self.transition(state, Letter::Symbol(symbol))
        })
    }

    /// True if `path` is a substring of the indexed text.
    pub fn contains(&self, path: &[S]) -> bool {
        self.walk(path).is_some()
    }
}

impl<S: Symbol> Default for SuffixAutomaton<S> {
    fn default() -> Self {
        Self::new()
    }
}
