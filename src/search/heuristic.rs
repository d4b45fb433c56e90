//! Potential bound used to order and prune the search frontier.

/// Estimate of how much longer a path of `length` symbols can still grow.
///
/// Static cap: ignores the remaining mismatch budget and the fan-out of the
/// current state.
#[inline]
pub fn remaining_estimate(length: usize, max_possible_length: usize) -> usize {
    max_possible_length.saturating_sub(length)
}

/// Upper bound on the final length of a path that currently has `length`
/// symbols. Equal to `max_possible_length` while `length` stays within it.
#[inline]
pub fn potential_bound(length: usize, max_possible_length: usize) -> usize {
    length + remaining_estimate(length, max_possible_length)
}
