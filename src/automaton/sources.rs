//! Which input sequence a substring occurs in.

use std::ops::{BitOr, BitOrAssign};

/// One of the two input sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    /// The first sequence (left of the separator).
    First,
    /// The second sequence (right of the separator).
    Second,
}

impl Origin {
    /// The opposite sequence.
    #[inline]
    pub fn other(self) -> Origin {
        match self {
            Origin::First => Origin::Second,
            Origin::Second => Origin::First,
        }
    }
}

/// Set of input sequences containing the substrings of an automaton state.
///
/// All substrings of a state share their end positions, so they occur in
/// exactly the same inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sources(u8);

impl Sources {
    /// No input (root, or a state reachable only through the separator).
    pub const NONE: Sources = Sources(0);
    /// Only the first sequence.
    pub const FIRST: Sources = Sources(0b01);
    /// Only the second sequence.
    pub const SECOND: Sources = Sources(0b10);
    /// Both sequences.
    pub const BOTH: Sources = Sources(0b11);

    /// True if `origin` is in the set.
    #[inline]
    pub fn includes(self, origin: Origin) -> bool {
        self.0 & Sources::from(origin).0 != 0
    }

    /// True if the set is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Origin> for Sources {
    fn from(origin: Origin) -> Self {
        match origin {
            Origin::First => Sources::FIRST,
            Origin::Second => Sources::SECOND,
        }
    }
}

impl BitOr for Sources {
    type Output = Sources;

    fn bitor(self, rhs: Sources) -> Sources {
        Sources(self.0 | rhs.0)
    }
}

impl BitOrAssign for Sources {
    fn bitor_assign(&mut self, rhs: Sources) {
        self.0 |= rhs.0;
    }
}
