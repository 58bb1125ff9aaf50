//! The decoder combinator engine.
//!
//! A [`Decoder<A>`] is a reusable, composable, pure description of how to
//! validate-and-convert an untyped [`Value`] into a typed `A`, deferred
//! until [`Decoder::decode`] is invoked. Decoders compose into larger
//! decoders without executing anything; a decoder can be built and stored
//! long before the shape of the eventual input is known.
//!
//! Running a decoder is total: malformed input never panics, it produces a
//! descriptive `Err` string. The first failure encountered, in
//! left-to-right, outer-to-inner order, is the one surfaced.
//!
//! # Examples
//!
//! ```rust
//! use descry::decoder::{field, number, record, string};
//! use descry::value::Value;
//!
//! let input = Value::object([
//!     ("x", Value::from(5.0)),
//!     ("label", Value::from("origin")),
//! ]);
//!
//! let point = record()
//!     .assign("x", field("x", number()))
//!     .assign("label", field("label", string()))
//!     .build(|fields| {
//!         fields.require::<f64>("x").flat_map(|x| {
//!             fields.require::<String>("label").map(|label| (x, label))
//!         })
//!     });
//!
//! assert_eq!(point.decode(&input).value(), Some((5.0, "origin".to_string())));
//! ```

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::maybe::Maybe;
use crate::record::Record;
use crate::render::stringify;
use crate::result::Result;
use crate::value::{Segment, Value};

/// A deferred validation: a shared, immutable wrapper around a pure
/// function from an untyped input to `Result<String, A>`.
///
/// Decoders are stateless and reentrant; `Clone` is a handle copy, and the
/// same decoder may be run any number of times against any inputs with no
/// coordination.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::number;
/// use descry::value::Value;
///
/// let decoder = number();
/// assert!(decoder.decode(&Value::from(5.0)).is_ok());
/// assert!(decoder.decode(&Value::from("5")).is_err());
/// ```
pub struct Decoder<A> {
    run: Rc<dyn Fn(&Value) -> Result<String, A>>,
}

impl<A> Clone for Decoder<A> {
    fn clone(&self) -> Self {
        Self { run: Rc::clone(&self.run) }
    }
}

impl<A> fmt::Debug for Decoder<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Decoder").finish_non_exhaustive()
    }
}

impl<A: 'static> Decoder<A> {
    /// Wraps a decoding function.
    ///
    /// The function must be pure: same input, same output, no shared
    /// mutable state. Every combinator in this module is built on `new`.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&Value) -> Result<String, A> + 'static,
    {
        Self { run: Rc::new(run) }
    }

    /// Runs the decoder against an input value.
    ///
    /// Total: all failure is represented as `Err`, never a panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::decoder::string;
    /// use descry::value::Value;
    ///
    /// assert_eq!(string().decode(&Value::from("hi")).value(), Some("hi".to_string()));
    /// ```
    #[must_use]
    pub fn decode(&self, value: &Value) -> Result<String, A> {
        (self.run)(value)
    }

    /// Post-processes a successful decode.
    ///
    /// Satisfies the functor laws under `decode`: mapping the identity
    /// changes nothing, and mapping a composition equals composing maps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::decoder::string;
    /// use descry::value::Value;
    ///
    /// let length = string().map(|text| text.len());
    /// assert_eq!(length.decode(&Value::from("four")).value(), Some(4));
    /// ```
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Decoder<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Decoder::new(move |value| self.decode(value).map(|decoded| function(decoded)))
    }

    /// Builds a dependent decoder whose shape may depend on an already
    /// decoded value.
    ///
    /// The decoder returned by `function` is re-applied to the *original*
    /// input, not to a sub-slice, so dependent decoders see the whole
    /// value they were chosen from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::decoder::{fail, field, number, string, Decoder};
    /// use descry::value::Value;
    ///
    /// // Pick the payload decoder based on a tag in the same input.
    /// let tagged: Decoder<f64> = field("tag", string()).flat_map(|tag| {
    ///     if tag == "number" {
    ///         field("payload", number())
    ///     } else {
    ///         fail(format!("unknown tag \"{tag}\""))
    ///     }
    /// });
    ///
    /// let input = Value::object([
    ///     ("tag", Value::from("number")),
    ///     ("payload", Value::from(7.0)),
    /// ]);
    /// assert_eq!(tagged.decode(&input).value(), Some(7.0));
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> Decoder<B>
    where
        B: 'static,
        F: Fn(A) -> Decoder<B> + 'static,
    {
        Decoder::new(move |value| {
            self.decode(value).flat_map(|decoded| function(decoded).decode(value))
        })
    }
}

impl Decoder<Record> {
    /// Attaches one more named field to a record-building chain.
    ///
    /// Runs `self`; on success, runs `other` against the same original
    /// input; on success of both, extends the record with the new field.
    /// The first failure wins: when the chain has already failed, `other`
    /// is never evaluated and the earlier error is returned verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::decoder::{field, number, record};
    /// use descry::value::Value;
    ///
    /// let decoder = record().assign("k", field("x", number()));
    ///
    /// let good = Value::object([("x", Value::from(5.0))]);
    /// let decoded = decoder.decode(&good).value().unwrap();
    /// assert_eq!(decoded.require::<f64>("k").value(), Some(5.0));
    ///
    /// let bad = Value::object([("x", Value::from("5"))]);
    /// assert!(decoder.decode(&bad).is_err());
    /// ```
    #[must_use]
    pub fn assign<B, K>(self, key: K, other: Decoder<B>) -> Self
    where
        B: Any,
        K: Into<String>,
    {
        let key: String = key.into();
        self.flat_map(move |partial| {
            let key = key.clone();
            other.clone().map(move |decoded| partial.clone().with(key.clone(), decoded))
        })
    }

    /// Converts the finished record into a caller-chosen destination
    /// structure, with validation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::decoder::{field, number, record};
    /// use descry::value::Value;
    ///
    /// struct Point {
    ///     x: f64,
    ///     y: f64,
    /// }
    ///
    /// let decoder = record()
    ///     .assign("x", field("x", number()))
    ///     .assign("y", field("y", number()))
    ///     .build(|fields| {
    ///         fields.require::<f64>("x").flat_map(|x| {
    ///             fields.require::<f64>("y").map(|y| Point { x, y })
    ///         })
    ///     });
    ///
    /// let input = Value::object([("x", Value::from(1.0)), ("y", Value::from(2.0))]);
    /// let point = decoder.decode(&input).value().unwrap();
    /// assert_eq!((point.x, point.y), (1.0, 2.0));
    /// ```
    #[must_use]
    pub fn build<T, F>(self, convert: F) -> Decoder<T>
    where
        T: 'static,
        F: Fn(&Record) -> Result<String, T> + 'static,
    {
        Decoder::new(move |value| self.decode(value).flat_map(|partial| convert(&partial)))
    }
}

// =============================================================================
// Base Cases
// =============================================================================

/// A decoder that always succeeds with the given value, ignoring input.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::succeed;
/// use descry::value::Value;
///
/// let constant = succeed(42);
/// assert_eq!(constant.decode(&Value::Null).value(), Some(42));
/// assert_eq!(constant.decode(&Value::from("anything")).value(), Some(42));
/// ```
#[must_use]
pub fn succeed<A>(value: A) -> Decoder<A>
where
    A: Clone + 'static,
{
    Decoder::new(move |_| Result::Ok(value.clone()))
}

/// A decoder that always fails with the given message, ignoring input.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::fail;
/// use descry::value::Value;
///
/// let refused = fail::<i32, _>("not today");
/// assert_eq!(refused.decode(&Value::Null).error(), Some("not today".to_string()));
/// ```
#[must_use]
pub fn fail<A, M>(message: M) -> Decoder<A>
where
    A: 'static,
    M: Into<String>,
{
    let message = message.into();
    Decoder::new(move |_| Result::Err(message.clone()))
}

// =============================================================================
// Primitives
// =============================================================================

/// Formats the type-mismatch failure all primitive decoders report.
fn type_mismatch(expected: &str, actual: &Value) -> String {
    format!(
        "I expected to find a {} but instead I found {}",
        expected.to_uppercase(),
        stringify(actual)
    )
}

/// Decodes a textual value. No coercion: nothing but a string is accepted.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::string;
/// use descry::value::Value;
///
/// assert!(string().decode(&Value::from("5")).is_ok());
/// assert!(string().decode(&Value::from(5.0)).is_err());
/// ```
#[must_use]
pub fn string() -> Decoder<String> {
    Decoder::new(|value| match value {
        Value::String(text) => Result::Ok(text.clone()),
        other => Result::Err(type_mismatch("string", other)),
    })
}

/// Decodes a numeric value. A numeric string is not accepted.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::number;
/// use descry::value::Value;
///
/// assert_eq!(number().decode(&Value::from(5.0)).value(), Some(5.0));
/// assert_eq!(
///     number().decode(&Value::from("5")).error(),
///     Some("I expected to find a NUMBER but instead I found \"5\"".to_string()),
/// );
/// ```
#[must_use]
pub fn number() -> Decoder<f64> {
    Decoder::new(|value| match value {
        Value::Number(numeric) => Result::Ok(*numeric),
        other => Result::Err(type_mismatch("number", other)),
    })
}

/// Decodes a boolean value.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::boolean;
/// use descry::value::Value;
///
/// assert_eq!(boolean().decode(&Value::from(false)).value(), Some(false));
/// assert!(boolean().decode(&Value::Null).is_err());
/// ```
#[must_use]
pub fn boolean() -> Decoder<bool> {
    Decoder::new(|value| match value {
        Value::Bool(flag) => Result::Ok(*flag),
        other => Result::Err(type_mismatch("boolean", other)),
    })
}

// =============================================================================
// Structural Combinators
// =============================================================================

/// Decodes a named field of a keyed-map input.
///
/// A missing key passes the absence sentinel `Null` through to `decoder`;
/// a non-indexable input fails with a message naming the field that could
/// not be read.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::{field, number};
/// use descry::value::Value;
///
/// let input = Value::object([("x", Value::from(5.0)), ("y", Value::from("4"))]);
/// assert_eq!(field("x", number()).decode(&input).value(), Some(5.0));
/// ```
#[must_use]
pub fn field<A: 'static>(name: impl Into<String>, decoder: Decoder<A>) -> Decoder<A> {
    let segment = Segment::Key(name.into());
    Decoder::new(move |value| value.read(&segment).flat_map(|inner| decoder.decode(&inner)))
}

/// Decodes a positional element of a sequence input.
///
/// An out-of-range position passes the absence sentinel `Null` through to
/// `decoder`.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::{index, string};
/// use descry::value::Value;
///
/// let input = Value::array([Value::from("a"), Value::from("b")]);
/// assert_eq!(index(1, string()).decode(&input).value(), Some("b".to_string()));
/// ```
#[must_use]
pub fn index<A: 'static>(position: usize, decoder: Decoder<A>) -> Decoder<A> {
    let segment = Segment::Index(position);
    Decoder::new(move |value| value.read(&segment).flat_map(|inner| decoder.decode(&inner)))
}

/// Decodes a value reached by walking a path of keys and positions.
///
/// Each step uses the same containment semantics as [`field`] and
/// [`index`]. The first failing step fails the whole combinator with the
/// full requested path, a rendering of the root input and the underlying
/// access failure; a partial failure is never silently coerced into the
/// absence sentinel.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::{at, string};
/// use descry::path;
/// use descry::value::Value;
///
/// let input = Value::object([(
///     "z",
///     Value::object([("type", Value::array([Value::from("adv"), Value::from("7")]))]),
/// )]);
///
/// let deep = at(path!["z", "type", 0], string());
/// assert_eq!(deep.decode(&input).value(), Some("adv".to_string()));
///
/// let missing = at(path!["z", "t", 0], string());
/// assert!(missing.decode(&input).error().unwrap().contains("Not existed path"));
/// ```
#[must_use]
pub fn at<A: 'static>(segments: Vec<Segment>, decoder: Decoder<A>) -> Decoder<A> {
    Decoder::new(move |value| {
        let mut current = value.clone();
        for segment in &segments {
            match current.read(segment) {
                Result::Ok(next) => current = next,
                Result::Err(access_error) => {
                    return Result::Err(format!(
                        "Not existed path {} in {}.\n{access_error}",
                        join_segments(&segments),
                        stringify(value),
                    ));
                }
            }
        }
        decoder.decode(&current)
    })
}

fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

/// Decodes every element of a sequence input, in order.
///
/// A non-sequence input fails immediately with the ARRAY type-mismatch
/// message. The first failing element aborts the whole operation,
/// propagating exactly that element's error message unmodified. Decoding
/// is eager: on success every element has been visited.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::{array, string};
/// use descry::value::Value;
///
/// let input = Value::array([Value::from("1"), Value::from("2")]);
/// assert_eq!(
///     array(string()).decode(&input).value(),
///     Some(vec!["1".to_string(), "2".to_string()]),
/// );
/// ```
#[must_use]
pub fn array<A: 'static>(decoder: Decoder<A>) -> Decoder<Vec<A>> {
    Decoder::new(move |value| match value {
        Value::Array(items) => {
            let elements = items.borrow();
            let mut decoded = Vec::with_capacity(elements.len());
            for element in elements.iter() {
                match decoder.decode(element) {
                    Result::Ok(item) => decoded.push(item),
                    Result::Err(error) => return Result::Err(error),
                }
            }
            Result::Ok(decoded)
        }
        other => Result::Err(type_mismatch("array", other)),
    })
}

// =============================================================================
// Inconsistent Structures
// =============================================================================

/// Tries each decoder in order against the same input, returning the first
/// success.
///
/// When every decoder fails, the failure lists each attempt's error, one
/// per line.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::{number, one_of, string, Decoder};
/// use descry::value::Value;
///
/// let loose: Decoder<String> = one_of(vec![
///     string(),
///     number().map(|n| n.to_string()),
/// ]);
///
/// assert_eq!(loose.decode(&Value::from("7")).value(), Some("7".to_string()));
/// assert_eq!(loose.decode(&Value::from(7.0)).value(), Some("7".to_string()));
/// assert!(loose.decode(&Value::Null).is_err());
/// ```
#[must_use]
pub fn one_of<A: 'static>(decoders: Vec<Decoder<A>>) -> Decoder<A> {
    Decoder::new(move |value| {
        let mut failures = Vec::with_capacity(decoders.len());
        for decoder in &decoders {
            match decoder.decode(value) {
                Result::Ok(decoded) => return Result::Ok(decoded),
                Result::Err(error) => failures.push(error),
            }
        }
        let mut message = String::from("I tried the following decoders but none succeeded:");
        for failure in &failures {
            message.push('\n');
            message.push_str(failure);
        }
        Result::Err(message)
    })
}

/// Makes a decoder total: success wraps in `Just`, any failure becomes
/// `Ok(Nothing)`.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::{field, number, optional};
/// use descry::maybe::Maybe;
/// use descry::value::Value;
///
/// let lenient = optional(field("x", number()));
///
/// let present = Value::object([("x", Value::from(5.0))]);
/// assert_eq!(lenient.decode(&present).value(), Some(Maybe::Just(5.0)));
///
/// let absent = Value::object([("y", Value::from(5.0))]);
/// assert_eq!(lenient.decode(&absent).value(), Some(Maybe::Nothing));
/// ```
#[must_use]
pub fn optional<A: 'static>(decoder: Decoder<A>) -> Decoder<Maybe<A>> {
    Decoder::new(move |value| match decoder.decode(value) {
        Result::Ok(decoded) => Result::Ok(Maybe::Just(decoded)),
        Result::Err(_) => Result::Ok(Maybe::Nothing),
    })
}

// =============================================================================
// Record Building
// =============================================================================

/// The head of a fluent record-building chain: always succeeds with the
/// empty [`Record`].
///
/// Equivalent to `succeed(Record::new())`.
#[must_use]
pub fn record() -> Decoder<Record> {
    succeed(Record::new())
}

// The decoding function is held behind an `Rc`; decoders stay on one thread.
static_assertions::assert_not_impl_any!(Decoder<f64>: Send, Sync);
