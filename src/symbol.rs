//! Symbol abstraction for automaton edges.
//!
//! This module provides the [`Symbol`] bound shared by every input sequence,
//! the [`Letter`] type used as the automaton's edge label, and the
//! [`TextUnit`] trait for turning text into symbol sequences at byte or
//! character granularity.

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for the symbols of an input sequence.
///
/// Symbols must be totally ordered so that edge lists can be kept sorted and
/// the search visits transitions in a deterministic order.
pub trait Symbol: Copy + Ord + Hash + Debug {}

impl<T: Copy + Ord + Hash + Debug> Symbol for T {}

/// Edge label of the suffix automaton.
///
/// The two inputs are joined by [`Letter::Separator`]. Since it is a variant
/// of its own it can never be equal to an input symbol, whatever the alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter<S> {
    /// A symbol taken from one of the input sequences.
    Symbol(S),
    /// The boundary between the first and second sequence.
    Separator,
}

impl<S: Symbol> Letter<S> {
    /// Returns the wrapped symbol, or `None` for the separator.
    #[inline]
    pub fn symbol(self) -> Option<S> {
        match self {
            Letter::Symbol(s) => Some(s),
            Letter::Separator => None,
        }
    }

    /// True for [`Letter::Separator`].
    #[inline]
    pub fn is_separator(self) -> bool {
        matches!(self, Letter::Separator)
    }
}

impl<S> From<S> for Letter<S> {
    fn from(symbol: S) -> Self {
        Letter::Symbol(symbol)
    }
}

/// Text granularity for string inputs.
///
/// - **Byte-level (u8)**: fastest, but a multi-byte UTF-8 character counts
///   as several symbols and one substitution may cost several mismatches.
/// - **Character-level (char)**: one symbol per Unicode scalar value.
pub trait TextUnit: Symbol {
    /// Split a string into units.
    fn from_str(s: &str) -> Vec<Self>;

    /// Join units back into a string.
    ///
    /// For `u8` this is lossy when the slice cuts a UTF-8 sequence.
    fn to_string(units: &[Self]) -> String;
}

impl TextUnit for u8 {
    #[inline]
    fn from_str(s: &str) -> Vec<Self> {
        s.as_bytes().to_vec()
    }

    #[inline]
    fn to_string(units: &[Self]) -> String {
        String::from_utf8_lossy(units).into_owned()
    }
}

impl TextUnit for char {
    #[inline]
    fn from_str(s: &str) -> Vec<Self> {
        s.chars().collect()
    }

    #[inline]
    fn to_string(units: &[Self]) -> String {
        units.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_sorts_after_symbols() {
        assert!(Letter::Symbol(u8::MAX) < Letter::Separator);
        assert!(Letter::Symbol('\u{10FFFF}') < Letter::Separator);
    }

    #[test]
    fn test_separator_never_equals_symbol() {
        // '#' is an ordinary symbol here, not the separator.
        let hash: Letter<char> = '#'.into();
        assert_ne!(hash, Letter::Separator);
        assert_eq!(hash.symbol(), Some('#'));
        assert!(Letter::<char>::Separator.symbol().is_none());
        assert!(Letter::<char>::Separator.is_separator());
    }

    #[test]
    fn test_u8_unicode() {
        let units = <u8 as TextUnit>::from_str("café");
        // 'é' is 2 bytes in UTF-8
        assert_eq!(units.len(), 5);
        assert_eq!(<u8 as TextUnit>::to_string(&units), "café");
    }

    #[test]
    fn test_char_unicode() {
        let units = <char as TextUnit>::from_str("café");
        assert_eq!(units, vec!['c', 'a', 'f', 'é']);
        assert_eq!(<char as TextUnit>::to_string(&units), "café");
    }
}
