//! Search parameters and their builder.

use crate::error::{Error, Result};

/// Validated parameters for one search run.
///
/// # Example
///
/// ```rust
/// use kmismatch::SearchConfig;
///
/// let config = SearchConfig::builder()
///     .max_mismatches(1)
///     .min_length(3)
///     .build()?;
/// assert_eq!(config.max_mismatches(), 1);
/// # Ok::<(), kmismatch::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    max_mismatches: usize,
    min_length: usize,
    max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Config with mismatch budget `k` and minimum length `min_length`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMinLength`] if `min_length` is zero.
    pub fn new(k: usize, min_length: usize) -> Result<Self> {
        Self::builder().max_mismatches(k).min_length(min_length).build()
    }

    /// Start a builder with `k = 0`, `min_length = 1` and no expansion limit.
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }

    /// Maximum number of substitutions tolerated in a match.
    #[inline]
    pub fn max_mismatches(&self) -> usize {
        self.max_mismatches
    }

    /// Shortest match worth reporting.
    #[inline]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Number of node expansions after which the search gives up and returns
    /// its best result so far.
    #[inline]
    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}

/// Builder for [`SearchConfig`] with a fluent API.
#[derive(Clone, Debug)]
pub struct SearchConfigBuilder {
    max_mismatches: usize,
    min_length: usize,
    max_expansions: Option<usize>,
}

impl SearchConfigBuilder {
    /// Create a builder with default values.
    pub fn new() -> Self {
        Self {
            max_mismatches: 0,
            min_length: 1,
            max_expansions: None,
        }
    }

    /// Set the mismatch budget `k`.
    pub fn max_mismatches(mut self, k: usize) -> Self {
        self.max_mismatches = k;
        self
    }

    /// Set the minimum acceptable match length.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Stop after `limit` expansions. Results found up to that point are
    /// still returned.
    pub fn max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Build the config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMinLength`] if the minimum length is zero.
    pub fn build(self) -> Result<SearchConfig> {
        if self.min_length == 0 {
            return Err(Error::InvalidMinLength);
        }
        Ok(SearchConfig {
            max_mismatches: self.max_mismatches,
            min_length: self.min_length,
            max_expansions: self.max_expansions,
        })
    }
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SearchConfig::builder().build().unwrap();
        assert_eq!(config.max_mismatches(), 0);
        assert_eq!(config.min_length(), 1);
        assert_eq!(config.max_expansions(), None);
    }

    #[test]
    fn test_builder_complete() {
        let config = SearchConfig::builder()
            .max_mismatches(2)
            .min_length(5)
            .max_expansions(100)
            .build()
            .unwrap();
        assert_eq!(config.max_mismatches(), 2);
        assert_eq!(config.min_length(), 5);
        assert_eq!(config.max_expansions(), Some(100));
    }

    #[test]
    fn test_zero_min_length_rejected() {
        assert_eq!(SearchConfig::new(1, 0), Err(Error::InvalidMinLength));
        let result = SearchConfig::builder().min_length(0).build();
        assert_eq!(result, Err(Error::InvalidMinLength));
    }
}
