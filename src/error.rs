//! Error types for bounded-mismatch searches.

use thiserror::Error;

/// Errors that can occur when configuring or running a search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The minimum match length was zero.
    ///
    /// Every reported match must contain at least one symbol, so a minimum
    /// length of zero is rejected before the automaton is built.
    #[error("Minimum match length must be at least 1")]
    InvalidMinLength,
}

/// A specialized `Result` type for search operations.
pub type Result<T> = std::result::Result<T, Error>;
