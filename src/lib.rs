//! # descry
//!
//! A composable decoder combinator library that turns untyped, loosely
//! structured values into typed, validated Rust data.
//!
//! ## Overview
//!
//! Code that receives data from untrusted or loosely-typed sources
//! (network payloads, config files, external APIs) needs type-safe values
//! plus actionable error messages. This library provides:
//!
//! - **Decoders**: pure, reusable descriptions of the shape you expect,
//!   composed from primitives (`string`, `number`, `boolean`) and
//!   structural combinators (`field`, `index`, `at`, `array`)
//! - **Record building**: a fluent `assign` chain that decodes an object
//!   field by field and short-circuits on the first failure
//! - **Result and Maybe**: the two monadic containers decoders are built
//!   on, with functor/monad operations and conversions between them
//! - **Cycle-safe rendering**: failure messages embed a rendering of the
//!   offending value that terminates even on self-referential input
//!
//! Running a decoder never panics on malformed input: the caller always
//! receives `Ok` or a descriptive `Err` string.
//!
//! ## Feature Flags
//!
//! - `serde`: deserialize any self-describing format into [`value::Value`]
//!
//! ## Example
//!
//! ```rust
//! use descry::prelude::*;
//!
//! let input = Value::object([
//!     ("name", Value::from("gadget")),
//!     ("price", Value::from(9.5)),
//!     ("tags", Value::array([Value::from("new"), Value::from("sale")])),
//! ]);
//!
//! let decoder = record()
//!     .assign("name", field("name", string()))
//!     .assign("price", field("price", number()))
//!     .assign("tags", field("tags", array(string())));
//!
//! assert!(decoder.decode(&input).is_ok());
//!
//! let wrong = Value::object([("name", Value::from(7.0))]);
//! assert!(decoder.decode(&wrong).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the full public surface. Note that the re-exported
/// [`result::Result`] shadows `std::result::Result` under a glob import;
/// import selectively if that is unwanted.
///
/// # Usage
///
/// ```rust
/// use descry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::convert::{maybe_to_result, result_to_maybe};
    pub use crate::decoder::{
        Decoder, array, at, boolean, fail, field, index, number, one_of, optional, record,
        string, succeed,
    };
    pub use crate::maybe::{Maybe, from_option, just, nothing};
    pub use crate::record::Record;
    pub use crate::render::stringify;
    pub use crate::result::{Result, err, ok, try_catch};
    pub use crate::value::{Segment, Value};
}

pub mod convert;
pub mod decoder;
pub mod maybe;
pub mod record;
pub mod render;
pub mod result;
pub mod value;

#[cfg(feature = "serde")]
mod de;
