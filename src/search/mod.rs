//! Best-first search for the longest common substring with at most `k`
//! mismatches.
//!
//! Each branch of the search walks a path in the suffix automaton of
//! `first + Separator + second` while comparing the spelled symbols against
//! one of the two inputs (its *origin*), starting at the origin's first
//! symbol. A path is only extended into states whose substrings occur in the
//! other input, so every reported match is a substring of one sequence aligned
//! against the beginning of the other.
//!
//! # Search Order
//!
//! The frontier is a max-heap ordered by:
//! 1. Primary: descending potential bound (see [`heuristic`])
//! 2. Secondary: descending length
//!
//! Nodes sharing `(state, mismatches, cursor, origin)` with an already
//! expanded node are dropped, whatever their length.
//!
//! # Example
//!
//! ```rust
//! use kmismatch::find_in_str;
//!
//! let found = find_in_str("aaaa", "aaaa", 0, 4)?.expect("identical inputs");
//! assert_eq!(found.length, 4);
//! assert_eq!((found.start_in_first, found.start_in_second), (0, 0));
//!
//! assert!(find_in_str("abc", "xyz", 0, 1)?.is_none());
//! # Ok::<(), kmismatch::Error>(())
//! ```

mod config;
pub mod heuristic;
mod node;

pub use config::{SearchConfig, SearchConfigBuilder};

use std::collections::BinaryHeap;

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::automaton::{Origin, SuffixAutomaton};
use crate::error::Result;
use crate::symbol::{Letter, Symbol, TextUnit};
use node::{SearchNode, VisitKey};

/// Best match reported by a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct CommonSubstring {
    /// Number of symbols in the match.
    pub length: usize,
    /// Start position in the first sequence.
    pub start_in_first: usize,
    /// Start position in the second sequence.
    pub start_in_second: usize,
    /// The sequence whose positions were tracked while matching. The start
    /// in the other sequence is always reported as 0.
    pub origin: Origin,
}

impl CommonSubstring {
    fn from_node(node: &SearchNode) -> Self {
        let (start_in_first, start_in_second) = match node.origin {
            Origin::First => (node.anchor, 0),
            Origin::Second => (0, node.anchor),
        };
        Self {
            length: node.length,
            start_in_first,
            start_in_second,
            origin: node.origin,
        }
    }
}

/// Counters collected during one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes pushed onto the frontier, seeds included.
    pub pushed: usize,
    /// Nodes popped from the frontier.
    pub popped: usize,
    /// Popped nodes dropped because their key was already expanded.
    pub duplicates: usize,
    /// Nodes whose outgoing edges were examined.
    pub expanded: usize,
    /// The search stopped because the best potential fell below the
    /// minimum length.
    pub cutoff: bool,
    /// The search stopped at the configured expansion limit.
    pub truncated: bool,
}

/// A built automaton together with the two sequences it indexes.
///
/// Build once, then [`run`](Self::run) any number of configurations. Each run
/// owns its own frontier and visited set.
#[derive(Clone, Debug)]
pub struct MismatchSearch<'a, S> {
    automaton: SuffixAutomaton<S>,
    first: &'a [S],
    second: &'a [S],
}

impl<'a, S: Symbol> MismatchSearch<'a, S> {
    /// Index `first` and `second`.
    pub fn new(first: &'a [S], second: &'a [S]) -> Self {
        Self {
            automaton: SuffixAutomaton::from_pair(first, second),
            first,
            second,
        }
    }

    /// The automaton of `first + Separator + second`.
    pub fn automaton(&self) -> &SuffixAutomaton<S> {
        &self.automaton
    }

    /// The input identified by `origin`.
    pub fn sequence(&self, origin: Origin) -> &'a [S] {
        match origin {
            Origin::First => self.first,
            Origin::Second => self.second,
        }
    }

    /// Longest qualifying match, or `None` if nothing reaches the minimum
    /// length.
    pub fn run(&self, config: &SearchConfig) -> Option<CommonSubstring> {
        self.run_with_stats(config).0
    }

    /// Like [`run`](Self::run), also returning search counters.
    pub fn run_with_stats(
        &self,
        config: &SearchConfig,
    ) -> (Option<CommonSubstring>, SearchStats) {
        let k = config.max_mismatches();
        let min_length = config.min_length();
        let max_possible_length = self.first.len().min(self.second.len());

        let mut stats = SearchStats::default();
        let mut frontier = BinaryHeap::new();
        let mut visited: FxHashSet<VisitKey> = FxHashSet::default();
        let mut best: Option<CommonSubstring> = None;

        for origin in [Origin::First, Origin::Second] {
            frontier.push(SearchNode::seed(origin, max_possible_length));
            stats.pushed += 1;
        }
        debug!(
            "search start: |first|={}, |second|={}, k={}, min_length={}",
            self.first.len(),
            self.second.len(),
            k,
            min_length
        );

        while let Some(node) = frontier.pop() {
            stats.popped += 1;

            if node.potential < min_length {
                debug!(
                    "potential {} below min_length {}, stopping",
                    node.potential, min_length
                );
                stats.cutoff = true;
                break;
            }

            if !visited.insert(node.key()) {
                stats.duplicates += 1;
                continue;
            }

            if node.length >= min_length && node.length > best.map_or(0, |b| b.length) {
                let found = CommonSubstring::from_node(&node);
                trace!("new best: {:?} ({} mismatches)", found, node.mismatches);
                best = Some(found);
            }

            if config.max_expansions().is_some_and(|limit| stats.expanded >= limit) {
                debug!("expansion limit {} reached", stats.expanded);
                stats.truncated = true;
                break;
            }
            stats.expanded += 1;

            // The cursor may not run past the end of the tracked sequence
            let Some(&expected) = self.sequence(node.origin).get(node.cursor) else {
                continue;
            };
            let target = node.origin.other();

            for (letter, next) in self.automaton.edges(node.state) {
                let Letter::Symbol(symbol) = letter else {
                    continue;
                };
                if !self.automaton.state(next).sources().includes(target) {
                    continue;
                }

                let mismatches = node.mismatches + usize::from(symbol != expected);
                if mismatches > k {
                    continue;
                }

                frontier.push(node.child(next, mismatches, max_possible_length));
                stats.pushed += 1;
            }
        }

        debug!("search done: {:?}, {:?}", best, stats);
        (best.filter(|b| b.length >= min_length), stats)
    }
}

/// Longest substring shared by `seq1` and `seq2` with at most `k`
/// mismatches and at least `min_limit` symbols.
///
/// Builds a fresh automaton, runs one search, and drops both.
///
/// # Errors
///
/// Returns [`Error::InvalidMinLength`](crate::Error::InvalidMinLength) if
/// `min_limit` is zero.
pub fn find_bounded_mismatch_common_substring<S: Symbol>(
    seq1: &[S],
    seq2: &[S],
    k: usize,
    min_limit: usize,
) -> Result<Option<CommonSubstring>> {
    let config = SearchConfig::new(k, min_limit)?;
    Ok(MismatchSearch::new(seq1, seq2).run(&config))
}

/// [`find_bounded_mismatch_common_substring`] over the characters of two
/// strings.
pub fn find_in_str(
    first: &str,
    second: &str,
    k: usize,
    min_limit: usize,
) -> Result<Option<CommonSubstring>> {
    let first = <char as TextUnit>::from_str(first);
    let second = <char as TextUnit>::from_str(second);
    find_bounded_mismatch_common_substring(&first, &second, k, min_limit)
}
