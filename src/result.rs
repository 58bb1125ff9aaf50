//! Result type - a recoverable success-or-failure container.
//!
//! This module provides the `Result<E, A>` type used as the output of every
//! decode operation. Unlike `std::result::Result`, the error parameter comes
//! first and the operations follow the functor/applicative/monad vocabulary
//! used throughout this crate:
//!
//! - [`Result::map`] transforms the success payload
//! - [`Result::map_error`] transforms the error payload
//! - [`Result::flat_map`] sequences a dependent computation
//! - [`Result::apply`] applies a wrapped function to a wrapped argument
//! - [`try_catch`] converts panicking code into the Result algebra
//!
//! # Examples
//!
//! ```rust
//! use descry::result::{ok, Result};
//!
//! let parsed: Result<String, i32> = ok(21);
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled, Result::Ok(42));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{UnwindSafe, catch_unwind};

/// A value that is either a success (`Ok`) or a failure (`Err`).
///
/// `Result<E, A>` carries exactly one of the two payloads and is immutable
/// once constructed: every operation consumes the value and produces a new
/// one. The error type is generic, though the decoder engine in this crate
/// always instantiates it to `String`.
///
/// # Type Parameters
///
/// * `E` - The type of the error payload
/// * `A` - The type of the success payload
///
/// # Examples
///
/// ```rust
/// use descry::result::Result;
///
/// let success: Result<String, i32> = Result::Ok(42);
/// let failure: Result<String, i32> = Result::Err("no good".to_string());
///
/// assert!(success.is_ok());
/// assert!(failure.is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<E, A> {
    /// The success variant, carrying the produced value.
    Ok(A),
    /// The failure variant, carrying a descriptive error.
    Err(E),
}

impl<E, A> Result<E, A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::result::Result;
    ///
    /// let success: Result<String, i32> = Result::Ok(42);
    /// assert!(success.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::result::Result;
    ///
    /// let failure: Result<String, i32> = Result::Err("no good".to_string());
    /// assert!(failure.is_err());
    /// ```
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<A>`, consuming the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::result::Result;
    ///
    /// let success: Result<String, i32> = Result::Ok(42);
    /// assert_eq!(success.value(), Some(42));
    ///
    /// let failure: Result<String, i32> = Result::Err("no good".to_string());
    /// assert_eq!(failure.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<A> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts into an `Option<E>`, consuming the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::result::Result;
    ///
    /// let failure: Result<String, i32> = Result::Err("no good".to_string());
    /// assert_eq!(failure.error(), Some("no good".to_string()));
    /// ```
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Returns a reference to the success payload, if any.
    #[inline]
    pub const fn value_ref(&self) -> Option<&A> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns a reference to the error payload, if any.
    #[inline]
    pub const fn error_ref(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success payload, leaving an error untouched.
    ///
    /// Satisfies the functor laws: mapping the identity function changes
    /// nothing, and mapping a composition equals composing two maps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::result::Result;
    ///
    /// let success: Result<String, i32> = Result::Ok(21);
    /// assert_eq!(success.map(|n| n * 2), Result::Ok(42));
    ///
    /// let failure: Result<String, i32> = Result::Err("no good".to_string());
    /// assert_eq!(failure.map(|n| n * 2), Result::Err("no good".to_string()));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Result<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Applies a function to the error payload, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::result::Result;
    ///
    /// let failure: Result<String, i32> = Result::Err("no".to_string());
    /// let loud = failure.map_error(|e| e.to_uppercase());
    /// assert_eq!(loud, Result::Err("NO".to_string()));
    /// ```
    #[inline]
    pub fn map_error<X, F>(self, function: F) -> Result<X, A>
    where
        F: FnOnce(E) -> X,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(function(error)),
        }
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Sequences a dependent computation, short-circuiting on `Err`.
    ///
    /// An error passes through unchanged without invoking `function`.
    /// Satisfies the monad laws (left identity, right identity,
    /// associativity).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::result::Result;
    ///
    /// fn half(n: i32) -> Result<String, i32> {
    ///     if n % 2 == 0 {
    ///         Result::Ok(n / 2)
    ///     } else {
    ///         Result::Err(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// let even: Result<String, i32> = Result::Ok(42);
    /// assert_eq!(even.flat_map(half), Result::Ok(21));
    ///
    /// let odd: Result<String, i32> = Result::Ok(21);
    /// assert_eq!(odd.flat_map(half), Result::Err("21 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Result<E, B>
    where
        F: FnOnce(A) -> Result<E, B>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Applies a wrapped function to a wrapped argument.
    ///
    /// The success payload of `self` must be a single-argument function;
    /// this is enforced at compile time, so applying a non-function can
    /// never be written. If `self` is an error, its error wins; otherwise
    /// if `other` is an error, that error wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::result::Result;
    ///
    /// let add_one: Result<String, _> = Result::Ok(|n: i32| n + 1);
    /// let argument: Result<String, i32> = Result::Ok(41);
    /// assert_eq!(add_one.apply(argument), Result::Ok(42));
    /// ```
    #[inline]
    pub fn apply<B, C>(self, other: Result<E, B>) -> Result<E, C>
    where
        A: FnOnce(B) -> C,
    {
        match self {
            Self::Ok(function) => match other {
                Result::Ok(value) => Result::Ok(function(value)),
                Result::Err(error) => Result::Err(error),
            },
            Self::Err(error) => Result::Err(error),
        }
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Handles both cases in one call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::result::Result;
    ///
    /// let success: Result<String, i32> = Result::Ok(42);
    /// let rendered = success.fold(|e| e, |n| n.to_string());
    /// assert_eq!(rendered, "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, error_function: F, value_function: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Ok(value) => value_function(value),
            Self::Err(error) => error_function(error),
        }
    }

    /// Returns the success payload, or the fallback for an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::result::Result;
    ///
    /// let success: Result<String, i32> = Result::Ok(42);
    /// assert_eq!(success.with_default(0), 42);
    ///
    /// let failure: Result<String, i32> = Result::Err("no good".to_string());
    /// assert_eq!(failure.with_default(0), 0);
    /// ```
    #[inline]
    pub fn with_default(self, fallback: A) -> A {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<E: fmt::Debug, A: fmt::Debug> fmt::Debug for Result<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Wraps a value in the success variant.
///
/// # Examples
///
/// ```rust
/// use descry::result::{ok, Result};
///
/// let success: Result<String, i32> = ok(42);
/// assert_eq!(success, Result::Ok(42));
/// ```
#[inline]
#[must_use]
pub const fn ok<E, A>(value: A) -> Result<E, A> {
    Result::Ok(value)
}

/// Wraps an error in the failure variant.
///
/// # Examples
///
/// ```rust
/// use descry::result::{err, Result};
///
/// let failure: Result<String, i32> = err("no good".to_string());
/// assert_eq!(failure, Result::Err("no good".to_string()));
/// ```
#[inline]
#[must_use]
pub const fn err<E, A>(error: E) -> Result<E, A> {
    Result::Err(error)
}

// =============================================================================
// Panic Boundary
// =============================================================================

/// Runs a closure, converting a panic into an `Err` with its description.
///
/// This is the designated boundary between panic-based external code and
/// the Result algebra; no other part of this crate lets a panic escape.
/// A normal return is wrapped in `Ok`.
///
/// # Examples
///
/// ```rust
/// use descry::result::{try_catch, Result};
///
/// let answer = try_catch(|| 6 * 7);
/// assert_eq!(answer, Result::Ok(42));
///
/// let faulted: Result<String, i32> = try_catch(|| panic!("boom"));
/// assert_eq!(faulted, Result::Err("boom".to_string()));
/// ```
pub fn try_catch<A, F>(function: F) -> Result<String, A>
where
    F: FnOnce() -> A + UnwindSafe,
{
    match catch_unwind(function) {
        Ok(value) => Result::Ok(value),
        Err(payload) => Result::Err(panic_description(payload.as_ref())),
    }
}

/// Extracts a readable message from a panic payload.
///
/// Payloads raised through `panic!` are either `&str` or `String`; anything
/// else gets a placeholder description.
fn panic_description(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("opaque panic payload")
    }
}
