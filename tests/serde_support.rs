//! Tests for the serde representations.

#![cfg(feature = "serde")]

use serde_json::json;
use sum_rail::{Errable, Fallible, Sum2, Sum3};

#[test]
fn sum2_serializes_as_an_externally_tagged_variant() {
    let first: Sum2<u32, String> = Sum2::First(640);
    assert_eq!(serde_json::to_value(&first).unwrap(), json!({ "First": 640 }));

    let second: Sum2<u32, String> = Sum2::Second("wide".to_owned());
    assert_eq!(serde_json::to_value(&second).unwrap(), json!({ "Second": "wide" }));
}

#[test]
fn sum2_deserializes_the_tagged_form() {
    let sum: Sum2<u32, String> = serde_json::from_value(json!({ "Second": "late" })).unwrap();
    assert_eq!(sum, Sum2::Second("late".to_owned()));
}

#[test]
fn sum3_tags_all_three_slots() {
    let third: Sum3<u8, u16, bool> = Sum3::Third(true);
    assert_eq!(serde_json::to_value(&third).unwrap(), json!({ "Third": true }));

    let back: Sum3<u8, u16, bool> = serde_json::from_value(json!({ "Second": 500 })).unwrap();
    assert_eq!(back, Sum3::Second(500));
}

#[test]
fn errable_is_transparent_over_its_sum() {
    let errable: Errable<u32, String> = Errable::from_error("boom".to_owned());
    assert_eq!(serde_json::to_value(&errable).unwrap(), json!({ "Second": "boom" }));

    let back: Errable<u32, String> = serde_json::from_value(json!({ "First": 7 })).unwrap();
    assert_eq!(back.into_value(), Some(7));
}

#[test]
fn fallible_uses_the_same_wire_shape() {
    // Both carriers serialize identically, so persisted data can move between
    // them without migration.
    let fallible: Fallible<u32, String> = Fallible::from_value(7);
    let errable: Errable<u32, String> = Errable::from_value(7);
    assert_eq!(
        serde_json::to_value(&fallible).unwrap(),
        serde_json::to_value(&errable).unwrap(),
    );

    let back: Fallible<u32, String> =
        serde_json::from_value(json!({ "Second": "gone" })).unwrap();
    assert_eq!(back.error(), Some(&"gone".to_owned()));
}
