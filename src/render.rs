//! Cycle-safe rendering of arbitrary input values.
//!
//! Every failure message in the decoder engine embeds a rendering of the
//! offending value. Input is environment-controlled and may be cyclic or
//! arbitrarily deep, so the walk tracks the allocation identity of every
//! container it has entered and renders the literal marker
//! `"[Cyclical Reference]"` at the point of recurrence. Identity is pointer
//! identity, never value equality: structurally equal but distinct values
//! are not flagged.
//!
//! # Examples
//!
//! ```rust
//! use descry::render::stringify;
//! use descry::value::Value;
//!
//! let point = Value::object([("x", Value::from(5.0))]);
//! assert_eq!(stringify(&point), "{\n  \"x\": 5\n}");
//!
//! let node = Value::object([("name", Value::from("root"))]);
//! node.insert("me", node.clone());
//! assert!(stringify(&node).contains("[Cyclical Reference]"));
//! ```

use std::rc::Rc;

use smallvec::SmallVec;

use crate::value::Value;

/// Marker emitted where a container re-enters itself.
const CYCLE_MARKER: &str = "\"[Cyclical Reference]\"";

/// Container identities already entered during one walk.
///
/// Identities accumulate for the whole walk, so the second occurrence of a
/// shared substructure is also cut off; only the first occurrence renders
/// in full.
type Visited = SmallVec<[*const (); 8]>;

/// Renders any value to a finite, human-readable, JSON-shaped string.
///
/// Two-space indentation, keys in map order, and guaranteed termination on
/// self-referential input.
///
/// # Examples
///
/// ```rust
/// use descry::render::stringify;
/// use descry::value::Value;
///
/// assert_eq!(stringify(&Value::from("5")), "\"5\"");
/// assert_eq!(stringify(&Value::Null), "null");
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    let mut output = String::new();
    let mut visited = Visited::new();
    render(value, 0, &mut visited, &mut output);
    output
}

fn render(value: &Value, depth: usize, visited: &mut Visited, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(number) => render_number(*number, output),
        Value::String(text) => render_text(text, output),
        Value::Array(items) => {
            let identity = Rc::as_ptr(items).cast::<()>();
            if visited.contains(&identity) {
                output.push_str(CYCLE_MARKER);
                return;
            }
            visited.push(identity);

            let elements = items.borrow();
            if elements.is_empty() {
                output.push_str("[]");
                return;
            }
            output.push_str("[\n");
            for (position, element) in elements.iter().enumerate() {
                if position > 0 {
                    output.push_str(",\n");
                }
                indent(depth + 1, output);
                render(element, depth + 1, visited, output);
            }
            output.push('\n');
            indent(depth, output);
            output.push(']');
        }
        Value::Object(entries) => {
            let identity = Rc::as_ptr(entries).cast::<()>();
            if visited.contains(&identity) {
                output.push_str(CYCLE_MARKER);
                return;
            }
            visited.push(identity);

            let fields = entries.borrow();
            if fields.is_empty() {
                output.push_str("{}");
                return;
            }
            output.push_str("{\n");
            for (position, (key, field)) in fields.iter().enumerate() {
                if position > 0 {
                    output.push_str(",\n");
                }
                indent(depth + 1, output);
                render_text(key, output);
                output.push_str(": ");
                render(field, depth + 1, visited, output);
            }
            output.push('\n');
            indent(depth, output);
            output.push('}');
        }
    }
}

/// Non-finite numbers have no textual form and render as `null`; integral
/// numbers render without a fractional part.
#[allow(clippy::cast_possible_truncation)]
fn render_number(number: f64, output: &mut String) {
    if !number.is_finite() {
        output.push_str("null");
    } else if number == number.trunc() && number.abs() < 1e15 {
        output.push_str(&format!("{}", number as i64));
    } else {
        output.push_str(&format!("{number}"));
    }
}

fn render_text(text: &str, output: &mut String) {
    output.push('"');
    for character in text.chars() {
        match character {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            control if u32::from(control) < 0x20 => {
                output.push_str(&format!("\\u{:04x}", u32::from(control)));
            }
            other => output.push(other),
        }
    }
    output.push('"');
}

fn indent(depth: usize, output: &mut String) {
    for _ in 0..depth {
        output.push_str("  ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_scalar_rendering() {
        assert_eq!(stringify(&Value::from(5.0)), "5");
        assert_eq!(stringify(&Value::from(1.5)), "1.5");
        assert_eq!(stringify(&Value::from(true)), "true");
        assert_eq!(stringify(&Value::Null), "null");
    }

    #[rstest]
    fn test_cycle_terminates() {
        let node = Value::object(Vec::<(String, Value)>::new());
        node.insert("me", node.clone());
        assert_eq!(stringify(&node), "{\n  \"me\": \"[Cyclical Reference]\"\n}");
    }
}
