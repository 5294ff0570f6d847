//!
//! Fixed-range integer summation.
//!
//! The whole benchmark lives here: walk `[0, bound)` in ascending order and
//! accumulate into a single `u64`. The closed form `bound * (bound - 1) / 2`
//! exists as the representability guard and as the test oracle; the shipped
//! binary still runs the loop, because the loop is what gets timed.
//!

use thiserror::Error as ThisError;

/// Exclusive upper bound summed by the shipped `tally` binary.
pub const DEFAULT_BOUND: u64 = 10_000_000;

/// Largest bound whose full-range sum still fits the `u64` accumulator.
///
/// [`closed_form`] returns `Some` up to and including this bound and `None`
/// above it.
pub const MAX_EXACT_BOUND: u64 = 6_074_001_000;

///
/// SumError
///

#[derive(Debug, ThisError)]
pub enum SumError {
    /// The exact sum of `0..bound` exceeds `u64::MAX`.
    #[error("bound {bound} exceeds the largest exactly-summable bound {MAX_EXACT_BOUND}")]
    BoundTooLarge { bound: u64 },
}

/// Sum of all integers in `[0, bound)` by linear accumulation.
///
/// The empty range sums to zero. Bounds past [`MAX_EXACT_BOUND`] are rejected
/// before any iteration happens; every accepted bound is guaranteed not to
/// overflow, so the hot loop stays a plain add.
pub fn sum_below(bound: u64) -> Result<u64, SumError> {
    if closed_form(bound).is_none() {
        return Err(SumError::BoundTooLarge { bound });
    }

    let mut total: u64 = 0;
    for i in 0..bound {
        total += i;
    }

    Ok(total)
}

/// Closed-form sum of `0..bound`: `bound * (bound - 1) / 2`.
///
/// The even factor is halved before multiplying, so the result is exact with
/// no intermediate overflow; `None` means the sum itself does not fit `u64`.
#[must_use]
pub const fn closed_form(bound: u64) -> Option<u64> {
    if bound == 0 {
        return Some(0);
    }

    if bound % 2 == 0 {
        (bound / 2).checked_mul(bound - 1)
    } else {
        bound.checked_mul((bound - 1) / 2)
    }
}

///
/// TESTS
///
