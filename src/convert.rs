//! Natural transformations between [`Result`] and [`Maybe`].
//!
//! The two containers relate bidirectionally but lossily: converting a
//! `Result` to a `Maybe` discards the error payload, and reconstructing a
//! `Result` from a `Maybe` needs a caller-supplied replacement error.
//!
//! Round-tripping `Maybe -> Result -> Maybe` is lossless; the reverse
//! direction is not, for `Err` inputs.

use crate::maybe::Maybe;
use crate::result::Result;

/// Converts `Ok` to `Just` and `Err` to `Nothing`.
///
/// The error payload is discarded; this is documented data loss, not a
/// defect.
///
/// # Examples
///
/// ```rust
/// use descry::convert::result_to_maybe;
/// use descry::maybe::Maybe;
/// use descry::result::Result;
///
/// let success: Result<String, i32> = Result::Ok(42);
/// assert_eq!(result_to_maybe(success), Maybe::Just(42));
///
/// let failure: Result<String, i32> = Result::Err("no good".to_string());
/// assert_eq!(result_to_maybe(failure), Maybe::Nothing);
/// ```
#[inline]
#[must_use]
pub fn result_to_maybe<E, A>(result: Result<E, A>) -> Maybe<A> {
    match result {
        Result::Ok(value) => Maybe::Just(value),
        Result::Err(_) => Maybe::Nothing,
    }
}

/// Converts `Just` to `Ok` and `Nothing` to `Err` with the supplied error.
///
/// # Examples
///
/// ```rust
/// use descry::convert::maybe_to_result;
/// use descry::maybe::Maybe;
/// use descry::result::Result;
///
/// let present = Maybe::Just(42);
/// assert_eq!(maybe_to_result("absent", present), Result::Ok(42));
///
/// let absent: Maybe<i32> = Maybe::Nothing;
/// assert_eq!(maybe_to_result("absent", absent), Result::Err("absent"));
/// ```
#[inline]
#[must_use]
pub fn maybe_to_result<E, A>(error: E, maybe: Maybe<A>) -> Result<E, A> {
    match maybe {
        Maybe::Just(value) => Result::Ok(value),
        Maybe::Nothing => Result::Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_maybe_round_trip_is_lossless() {
        let present = Maybe::Just(42);
        assert_eq!(result_to_maybe(maybe_to_result("absent", present)), Maybe::Just(42));

        let absent: Maybe<i32> = Maybe::Nothing;
        assert_eq!(result_to_maybe(maybe_to_result("absent", absent)), Maybe::Nothing);
    }
}
