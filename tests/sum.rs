//! Tests for the Sum2/Sum3 engine.

use sum_rail::{Sum2, Sum3};

#[test]
fn exactly_one_slot_is_populated() {
    let first: Sum2<i32, &str> = Sum2::First(1);
    assert!(first.is_first());
    assert!(!first.is_second());
    assert_eq!(first.as_first(), Some(&1));
    assert_eq!(first.as_second(), None);

    let second: Sum2<i32, &str> = Sum2::Second("two");
    assert!(second.is_second());
    assert_eq!(second.as_first(), None);
    assert_eq!(second.as_second(), Some(&"two"));
}

#[test]
fn reduce_runs_only_the_populated_branch() {
    let first: Sum2<i32, &str> = Sum2::First(21);
    assert_eq!(first.reduce(|n| n * 2, |_| unreachable!()), 42);

    let second: Sum2<i32, &str> = Sum2::Second("boom");
    assert_eq!(second.reduce(|_| unreachable!(), str::len), 4);
}

#[test]
fn map_preserves_the_discriminant() {
    let first: Sum2<i32, &str> = Sum2::First(2);
    let mapped = first.map(|n| n.to_string(), str::len);
    assert_eq!(mapped, Sum2::First("2".to_owned()));

    let second: Sum2<i32, &str> = Sum2::Second("wide");
    let mapped = second.map(|n| n.to_string(), str::len);
    assert_eq!(mapped, Sum2::Second(4));
}

#[test]
fn one_sided_maps_leave_the_other_slot_alone() {
    let first: Sum2<i32, &str> = Sum2::First(20);
    assert_eq!(first.map_first(|n| n + 1), Sum2::First(21));

    let second: Sum2<i32, &str> = Sum2::Second("x");
    assert_eq!(second.map_first(|n| n + 1), Sum2::Second("x"));
    assert_eq!(Sum2::<i32, &str>::Second("x").map_second(str::len), Sum2::Second(1));
}

#[test]
fn visit_runs_exactly_the_populated_action() {
    use std::cell::Cell;

    let hits = Cell::new((0, 0));
    let sum: Sum2<i32, &str> = Sum2::Second("oops");
    sum.visit(
        |_| hits.set((hits.get().0 + 1, hits.get().1)),
        |_| hits.set((hits.get().0, hits.get().1 + 1)),
    );
    assert_eq!(hits.get(), (0, 1));
}

#[test]
fn into_accessors_consume_without_panicking() {
    let first: Sum2<String, i32> = Sum2::First("payload".to_owned());
    assert_eq!(first.into_first(), Some("payload".to_owned()));
    assert_eq!(Sum2::<String, i32>::Second(3).into_first(), None);
    assert_eq!(Sum2::<String, i32>::Second(3).into_second(), Some(3));
}

#[test]
fn unwrap_returns_the_payload_when_right() {
    let sum: Sum2<i32, &str> = Sum2::First(7);
    assert_eq!(sum.unwrap_first(), 7);
    assert_eq!(Sum2::<i32, &str>::Second("e").unwrap_second(), "e");
}

#[test]
#[should_panic(expected = "holding its second branch")]
fn unwrap_first_panics_on_second() {
    let sum: Sum2<i32, &str> = Sum2::Second("late");
    let _ = sum.unwrap_first();
}

#[test]
#[should_panic(expected = "holding its first branch")]
fn unwrap_second_panics_on_first() {
    let sum: Sum2<i32, &str> = Sum2::First(1);
    let _ = sum.unwrap_second();
}

#[test]
fn collapse_extracts_from_either_slot() {
    assert_eq!(Sum2::<i32, i32>::First(1).collapse(), 1);
    assert_eq!(Sum2::<i32, i32>::Second(2).collapse(), 2);
}

#[test]
fn result_round_trips_through_sum2() {
    let ok: Sum2<i32, &str> = Ok(5).into();
    assert_eq!(ok, Sum2::First(5));
    assert_eq!(Result::from(ok), Ok(5));

    let err: Sum2<i32, &str> = Err("bad").into();
    assert_eq!(err, Sum2::Second("bad"));
    assert_eq!(Result::from(err), Err("bad"));
}

#[test]
fn sum3_reduce_covers_every_slot() {
    let first: Sum3<i32, &str, bool> = Sum3::First(1);
    let second: Sum3<i32, &str, bool> = Sum3::Second("two");
    let third: Sum3<i32, &str, bool> = Sum3::Third(true);

    let tag = |s: Sum3<i32, &str, bool>| s.reduce(|_| "number", |_| "text", |_| "flag");
    assert_eq!(tag(first), "number");
    assert_eq!(tag(second), "text");
    assert_eq!(tag(third), "flag");
}

#[test]
fn sum3_map_preserves_the_discriminant() {
    let second: Sum3<i32, &str, bool> = Sum3::Second("four");
    let mapped = second.map(|n| n + 1, str::len, |b| !b);
    assert_eq!(mapped, Sum3::Second(4));

    let third: Sum3<i32, &str, bool> = Sum3::Third(false);
    assert_eq!(third.map_third(|b| !b), Sum3::Third(true));
}

#[test]
fn sum3_accessors_probe_the_right_slot() {
    let third: Sum3<i32, &str, bool> = Sum3::Third(true);
    assert!(third.is_third());
    assert_eq!(third.as_third(), Some(&true));
    assert_eq!(third.as_first(), None);
    assert_eq!(third.into_third(), Some(true));
    assert_eq!(Sum3::<i32, &str, bool>::First(1).into_third(), None);
}

#[test]
#[should_panic(expected = "holding another branch")]
fn sum3_unwrap_panics_on_a_different_slot() {
    let sum: Sum3<i32, &str, bool> = Sum3::First(1);
    let _ = sum.unwrap_third();
}

#[test]
fn sum3_collapse_extracts_from_any_slot() {
    assert_eq!(Sum3::<u8, u8, u8>::First(1).collapse(), 1);
    assert_eq!(Sum3::<u8, u8, u8>::Second(2).collapse(), 2);
    assert_eq!(Sum3::<u8, u8, u8>::Third(3).collapse(), 3);
}

#[test]
fn sum3_visit_runs_exactly_one_action() {
    use std::cell::Cell;

    let tag = Cell::new("");
    let sum: Sum3<i32, &str, bool> = Sum3::Second("hello");
    sum.visit(|_| tag.set("first"), |_| tag.set("second"), |_| tag.set("third"));
    assert_eq!(tag.get(), "second");
}
