//! # kmismatch
//!
//! Longest common substring of two sequences with at most `k` mismatches.
//!
//! The two inputs are indexed by a single suffix automaton over
//! `first + Separator + second`, then a best-first search walks the
//! automaton, comparing each path symbol by symbol against one of the inputs
//! and keeping track of the substitutions spent.
//!
//! ## Example
//!
//! ```rust
//! use kmismatch::prelude::*;
//!
//! match find_in_str("abcdefg", "cdxef", 1, 3)? {
//!     Some(found) => println!(
//!         "Length={}, Start in first={}, Start in second={}",
//!         found.length, found.start_in_first, found.start_in_second
//!     ),
//!     None => println!("no match"),
//! }
//! # Ok::<(), kmismatch::Error>(())
//! ```
//!
//! Generic symbols work the same way:
//!
//! ```rust
//! use kmismatch::find_bounded_mismatch_common_substring;
//!
//! let found = find_bounded_mismatch_common_substring(b"GATTACA", b"GATCACA", 1, 5)?;
//! assert_eq!(found.map(|f| f.length), Some(7));
//! # Ok::<(), kmismatch::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod error;
pub mod search;
pub mod symbol;

/// CLI argument definitions and output formatting
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use search::{
    find_bounded_mismatch_common_substring, find_in_str, CommonSubstring, MismatchSearch,
    SearchConfig, SearchConfigBuilder, SearchStats,
};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::{Origin, SuffixAutomaton};
    pub use crate::error::{Error, Result};
    pub use crate::search::{
        find_bounded_mismatch_common_substring, find_in_str, CommonSubstring, MismatchSearch,
        SearchConfig, SearchConfigBuilder, SearchStats,
    };
    pub use crate::symbol::{Letter, Symbol, TextUnit};
}
