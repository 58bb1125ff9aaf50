//! The closed representation of decodable input values.
//!
//! This module provides [`Value`], the tagged union every decoder pattern-
//! matches against: null, booleans, numbers, strings, ordered sequences and
//! keyed maps. It is the shape of data handed over by loosely-typed sources
//! (network payloads, config files, external APIs) after parsing.
//!
//! Containers are reference-counted and internally mutable so that shared
//! and even self-referential inputs are representable, as they are in the
//! host representations this crate receives data from. Cloning a container
//! value is a handle copy, not a deep copy.
//!
//! [`Segment`] describes one step of a structural path, and [`Value::read`]
//! is the single fallible containment access used by the `field`, `index`
//! and `at` combinators.
//!
//! # Examples
//!
//! ```rust
//! use descry::value::{Segment, Value};
//!
//! let point = Value::object([("x", Value::from(1.5)), ("y", Value::from(-2.0))]);
//! let x = point.read(&Segment::from("x"));
//! assert_eq!(x.value(), Some(Value::from(1.5)));
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::render::stringify;
use crate::result::Result;

/// An untyped input value: the closed set of shapes a decoder can inspect.
///
/// `Null` doubles as the absence sentinel: reading a missing key or an
/// out-of-range index produces `Null`, which the downstream decoder then
/// reports against.
///
/// # Examples
///
/// ```rust
/// use descry::value::Value;
///
/// let flag = Value::from(true);
/// let name = Value::from("elm");
/// let scores = Value::array([Value::from(1.0), Value::from(2.0)]);
/// ```
#[derive(Clone)]
pub enum Value {
    /// The null/absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number; integral and fractional values share one representation.
    Number(f64),
    /// A textual value.
    String(String),
    /// An ordered sequence, shared by handle.
    Array(Rc<RefCell<Vec<Value>>>),
    /// A keyed map, shared by handle.
    Object(Rc<RefCell<BTreeMap<String, Value>>>),
}

impl Value {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a sequence value from an iterator of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::value::Value;
    ///
    /// let pair = Value::array([Value::from(1.0), Value::from("two")]);
    /// ```
    #[must_use]
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Array(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Builds a keyed-map value from an iterator of entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::value::Value;
    ///
    /// let point = Value::object([("x", Value::from(1.0)), ("y", Value::from(2.0))]);
    /// ```
    #[must_use]
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Object(Rc::new(RefCell::new(
            entries.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        )))
    }

    // =========================================================================
    // In-place Extension
    // =========================================================================

    /// Adds or replaces an entry of a keyed map through the shared handle.
    ///
    /// Returns `false` (and does nothing) when this value is not a keyed
    /// map. Inserting a value's own handle is how self-referential test
    /// fixtures are built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::value::Value;
    ///
    /// let node = Value::object([("name", Value::from("root"))]);
    /// assert!(node.insert("me", node.clone()));
    /// assert!(!Value::Null.insert("me", Value::Null));
    /// ```
    pub fn insert<K: Into<String>>(&self, key: K, value: Self) -> bool {
        match self {
            Self::Object(entries) => {
                entries.borrow_mut().insert(key.into(), value);
                true
            }
            _ => false,
        }
    }

    /// Appends an element to a sequence through the shared handle.
    ///
    /// Returns `false` (and does nothing) when this value is not a
    /// sequence.
    pub fn push(&self, value: Self) -> bool {
        match self {
            Self::Array(items) => {
                items.borrow_mut().push(value);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Containment Access
    // =========================================================================

    /// Reads one structural step, the access primitive behind `field`,
    /// `index` and `at`.
    ///
    /// A missing key or an out-of-range index yields the absence sentinel
    /// `Null`; reading into a scalar is an access error describing the
    /// failed step. Keyed maps accept index segments through their decimal
    /// rendering, and sequences absorb key segments as `Null`, matching
    /// the loosely-typed hosts this value model stands in for.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::value::{Segment, Value};
    ///
    /// let point = Value::object([("x", Value::from(5.0))]);
    /// assert_eq!(point.read(&Segment::from("x")).value(), Some(Value::from(5.0)));
    /// assert_eq!(point.read(&Segment::from("y")).value(), Some(Value::Null));
    /// assert!(Value::Null.read(&Segment::from("x")).is_err());
    /// ```
    pub fn read(&self, segment: &Segment) -> Result<String, Self> {
        match (self, segment) {
            (Self::Object(entries), Segment::Key(key)) => {
                Result::Ok(entries.borrow().get(key).cloned().unwrap_or(Self::Null))
            }
            (Self::Object(entries), Segment::Index(position)) => Result::Ok(
                entries.borrow().get(&position.to_string()).cloned().unwrap_or(Self::Null),
            ),
            (Self::Array(items), Segment::Index(position)) => {
                Result::Ok(items.borrow().get(*position).cloned().unwrap_or(Self::Null))
            }
            (Self::Array(_), Segment::Key(_)) => Result::Ok(Self::Null),
            (scalar, Segment::Key(key)) => {
                Result::Err(format!("Cannot read field \"{key}\" of {}", stringify(scalar)))
            }
            (scalar, Segment::Index(position)) => {
                Result::Err(format!("Cannot read index {position} of {}", stringify(scalar)))
            }
        }
    }
}

// =============================================================================
// Equality
// =============================================================================

impl PartialEq for Value {
    /// Containers compare equal when they are the same allocation or have
    /// equal contents; scalars compare by payload.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => {
                Rc::ptr_eq(left, right) || *left.borrow() == *right.borrow()
            }
            (Self::Object(left), Self::Object(right)) => {
                Rc::ptr_eq(left, right) || *left.borrow() == *right.borrow()
            }
            _ => false,
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl fmt::Display for Value {
    /// Delegates to the cycle-safe renderer, so printing a self-referential
    /// value terminates.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&stringify(self))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(items: Vec<Self>) -> Self {
        Self::array(items)
    }
}

// =============================================================================
// Path Segments
// =============================================================================

/// One step of a structural path: a map key or a sequence position.
///
/// # Examples
///
/// ```rust
/// use descry::value::Segment;
///
/// let key = Segment::from("name");
/// let position = Segment::from(0);
/// assert_eq!(key.to_string(), "name");
/// assert_eq!(position.to_string(), "0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A key into a keyed map.
    Key(String),
    /// A position into an ordered sequence.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => formatter.write_str(key),
            Self::Index(position) => write!(formatter, "{position}"),
        }
    }
}

impl From<&str> for Segment {
    #[inline]
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for Segment {
    #[inline]
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for Segment {
    #[inline]
    fn from(position: usize) -> Self {
        Self::Index(position)
    }
}

/// Builds a `Vec<Segment>` from mixed key and index literals.
///
/// # Examples
///
/// ```rust
/// use descry::path;
/// use descry::value::Segment;
///
/// let segments = path!["z", "type", 0];
/// assert_eq!(segments[0], Segment::from("z"));
/// assert_eq!(segments[2], Segment::from(0));
/// ```
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        vec![$($crate::value::Segment::from($segment)),*]
    };
}

// The shared-handle representation is deliberately single-threaded.
static_assertions::assert_not_impl_any!(Value: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_container_equality_by_contents() {
        let first = Value::array([Value::from(1.0), Value::from("a")]);
        let second = Value::array([Value::from(1.0), Value::from("a")]);
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_container_equality_by_handle() {
        let shared = Value::object([("k", Value::from(1.0))]);
        assert_eq!(shared, shared.clone());
    }

    #[rstest]
    fn test_read_missing_key_is_null() {
        let point = Value::object([("x", Value::from(5.0))]);
        assert_eq!(point.read(&Segment::from("y")), crate::result::ok(Value::Null));
    }
}
