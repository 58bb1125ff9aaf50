//! Heterogeneous records accumulated by the `assign` combinator.
//!
//! Rust has no anonymous "this object plus one more field" type, so the
//! record-building chain accumulates into [`Record`]: an immutable mapping
//! from field names to values of arbitrary types, with typed extraction.
//! Each extension reconstructs the mapping; the previous record is never
//! mutated.
//!
//! A finished record is converted into a caller-chosen destination
//! structure with [`Record::require`], usually inside
//! `Decoder::<Record>::build`.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::maybe::{Maybe, from_option};
use crate::result::Result;

/// An immutable mapping from field names to values of arbitrary types.
///
/// # Examples
///
/// ```rust
/// use descry::decoder::{field, number, record, string};
/// use descry::value::Value;
///
/// let decoder = record()
///     .assign("x", field("x", number()))
///     .assign("label", field("label", string()));
///
/// let input = Value::object([("x", Value::from(5.0)), ("label", Value::from("p"))]);
/// let decoded = decoder.decode(&input).value().unwrap();
///
/// assert_eq!(decoded.require::<f64>("x").value(), Some(5.0));
/// assert_eq!(decoded.require::<String>("label").value(), Some("p".to_string()));
/// ```
#[derive(Clone, Default)]
pub struct Record {
    fields: BTreeMap<String, Rc<dyn Any>>,
}

impl Record {
    /// The empty record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::record::Record;
    ///
    /// assert!(Record::new().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no field has been assigned yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` when a field with this name has been assigned.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Extends the record with one field, reconstructing the mapping.
    ///
    /// Assigning an existing name replaces its value, matching the shallow
    /// merge of the record-building chain.
    pub(crate) fn with<B: Any>(mut self, key: String, value: B) -> Self {
        self.fields.insert(key, Rc::new(value));
        self
    }

    /// Borrows a field at the requested type.
    ///
    /// `Nothing` when the field is missing or holds a different type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descry::record::Record;
    ///
    /// assert!(Record::new().get::<f64>("x").is_nothing());
    /// ```
    #[must_use]
    pub fn get<B: Any>(&self, key: &str) -> Maybe<&B> {
        from_option(self.fields.get(key).and_then(|stored| stored.as_ref().downcast_ref::<B>()))
    }

    /// Extracts a clone of a field at the requested type.
    ///
    /// The error distinguishes a missing field from one holding a
    /// different type.
    pub fn require<B: Any + Clone>(&self, key: &str) -> Result<String, B> {
        match self.fields.get(key) {
            None => Result::Err(format!("Missing field \"{key}\" in record")),
            Some(stored) => match stored.as_ref().downcast_ref::<B>() {
                Some(value) => Result::Ok(value.clone()),
                None => Result::Err(format!("Field \"{key}\" does not hold the requested type")),
            },
        }
    }
}

impl fmt::Debug for Record {
    /// Field values are type-erased, so only the names are shown.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Record")?;
        formatter.debug_set().entries(self.fields.keys()).finish()
    }
}

static_assertions::assert_not_impl_any!(Record: Send, Sync);
