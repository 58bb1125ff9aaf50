//! Property-based tests for the decoder engine.
//!
//! Decoders are verified against the laws their algebra promises, by
//! decoding arbitrarily generated inputs through both sides of each
//! equation:
//!
//! - **Functor identity**: `d.map(|x| x)` decodes like `d`
//! - **Functor composition**: `d.map(f).map(g)` decodes like `d.map(g . f)`
//! - **Constancy**: `succeed(a)` and `fail(m)` ignore their input
//! - **Short-circuiting**: a failed base skips the attached field decoder
//! - **Order preservation**: `array(d)` keeps element count and order

use descry::decoder::{Decoder, array, fail, field, number, optional, record, string, succeed};
use descry::record::Record;
use descry::result::{Result, err, ok};
use descry::value::Value;
use proptest::prelude::*;

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-1000i32..1000).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|items| Value::array(items)),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|entries| Value::object(entries)),
        ]
    })
}

fn arb_text_elements() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{0,6}", 0..8)
}

// =============================================================================
// Constancy of the Base Cases
// =============================================================================

proptest! {
    /// succeed produces its value no matter what the input looks like.
    #[test]
    fn prop_succeed_ignores_input(input in arb_value(), value in any::<i32>()) {
        prop_assert_eq!(succeed(value).decode(&input), ok(value));
    }

    /// fail produces its message no matter what the input looks like.
    #[test]
    fn prop_fail_ignores_input(input in arb_value(), message in "[a-z ]{1,20}") {
        let refused = fail::<i32, _>(message.clone());
        prop_assert_eq!(refused.decode(&input), err(message));
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Mapping the identity function changes no outcome.
    #[test]
    fn prop_decoder_map_identity_law(input in arb_value()) {
        let left = number().map(|x| x).decode(&input);
        let right = number().decode(&input);

        prop_assert_eq!(left, right);
    }

    /// Mapping a composition equals composing two maps.
    #[test]
    fn prop_decoder_map_composition_law(input in arb_value()) {
        let first = |text: String| text.len();
        let second = |length: usize| length.wrapping_mul(2);

        let left = string().map(first).map(second).decode(&input);
        let right = string().map(move |text| second(first(text))).decode(&input);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Short-circuiting
// =============================================================================

proptest! {
    /// A failed base returns its error verbatim; the attached decoder's
    /// error never appears.
    #[test]
    fn prop_assign_short_circuits(input in arb_value(), message in "[a-z ]{1,20}") {
        let base: Decoder<Record> = fail(message.clone());
        let outcome = base.assign("key", field("x", number())).decode(&input);

        prop_assert_eq!(outcome.error(), Some(message));
    }
}

// =============================================================================
// Array Ordering
// =============================================================================

proptest! {
    /// A fully textual sequence decodes to the same elements in the same
    /// order.
    #[test]
    fn prop_array_preserves_length_and_order(elements in arb_text_elements()) {
        let input = Value::array(elements.iter().map(|text| Value::from(text.clone())));
        let decoded = array(string()).decode(&input);

        prop_assert_eq!(decoded, ok(elements));
    }

    /// The first mismatching element fails the whole array with exactly
    /// its own message.
    #[test]
    fn prop_array_propagates_the_first_failure(
        elements in prop::collection::vec("[a-z]{0,6}", 1..6),
        position in any::<prop::sample::Index>(),
        intruder in -1000i32..1000,
    ) {
        let position = position.index(elements.len());
        let mut items: Vec<Value> = elements.iter().map(|text| Value::from(text.clone())).collect();
        items[position] = Value::from(intruder);

        let decoded = array(string()).decode(&Value::array(items));
        let expected = format!(
            "I expected to find a STRING but instead I found {intruder}"
        );

        prop_assert_eq!(decoded, err(expected));
    }
}

// =============================================================================
// Totality
// =============================================================================

proptest! {
    /// optional never fails, whatever the input.
    #[test]
    fn prop_optional_is_total(input in arb_value()) {
        prop_assert!(optional(number()).decode(&input).is_ok());
    }

    /// The record head always succeeds with the empty record.
    #[test]
    fn prop_record_head_always_succeeds(input in arb_value()) {
        let decoded = record().decode(&input);
        prop_assert!(matches!(decoded, Result::Ok(fields) if fields.is_empty()));
    }
}
