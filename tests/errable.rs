//! Tests for the Errable carrier.

use std::sync::atomic::{AtomicU32, Ordering};

use sum_rail::{Errable, Sum2};

fn halve(n: i32) -> Errable<i32, &'static str> {
    if n % 2 == 0 {
        Errable::from_value(n / 2)
    } else {
        Errable::from_error("odd")
    }
}

#[test]
fn on_success_binds_without_double_wrapping() {
    // from_value(v).on_success(f) == f(v)
    assert_eq!(Errable::from_value(42).on_success(halve), halve(42));
    assert_eq!(Errable::from_value(7).on_success(halve), halve(7));
}

#[test]
fn on_success_skips_the_error_branch() {
    let call_count = AtomicU32::new(0);

    let out = Errable::<i32, &str>::from_error("upstream").on_success(|n| {
        call_count.fetch_add(1, Ordering::SeqCst);
        Errable::from_value(n + 1)
    });

    assert_eq!(out.into_error(), Some("upstream"));
    assert_eq!(call_count.load(Ordering::SeqCst), 0); // Not called on error
}

#[test]
fn then_is_on_success() {
    assert_eq!(Errable::from_value(42).then(halve), Errable::from_value(42).on_success(halve));
}

#[test]
fn map_success_rewraps_a_plain_mapper() {
    let out = Errable::<i32, &str>::from_value(20).map_success(|n| n + 1);
    assert_eq!(out.into_value(), Some(21));

    let out = Errable::<i32, &str>::from_error("e").map_success(|n| n + 1);
    assert_eq!(out.into_error(), Some("e"));
}

#[test]
fn on_error_skips_the_success_branch() {
    let call_count = AtomicU32::new(0);

    let out: Errable<i32, usize> = Errable::<i32, &str>::from_value(9).on_error(|e| {
        call_count.fetch_add(1, Ordering::SeqCst);
        Errable::from_error(e.len())
    });

    assert_eq!(out.into_value(), Some(9));
    assert_eq!(call_count.load(Ordering::SeqCst), 0); // Not called on success
}

#[test]
fn on_error_can_recover_into_a_value() {
    let out: Errable<i32, usize> =
        Errable::<i32, &str>::from_error("four").on_error(|_| Errable::from_value(0));
    assert_eq!(out.into_value(), Some(0));
}

#[test]
fn map_error_retypes_the_error() {
    let out = Errable::<i32, &str>::from_error("boom").map_error(str::len);
    assert_eq!(out.into_error(), Some(4));
}

#[test]
fn reduce_eliminates_both_branches() {
    let ok: Errable<i32, &str> = Errable::from_value(2);
    assert_eq!(ok.reduce(|n| n * 10, |e| e.len() as i32), 20);

    let err: Errable<i32, &str> = Errable::from_error("late");
    assert_eq!(err.reduce(|n| n * 10, |e| e.len() as i32), 4);
}

#[test]
fn reduce_error_passes_the_value_through() {
    assert_eq!(Errable::<i32, &str>::from_value(7).reduce_error(|_| 0), 7);
    assert_eq!(Errable::<i32, &str>::from_error("xx").reduce_error(|e| e.len() as i32), 2);
}

#[test]
fn collapse_extracts_from_either_branch() {
    assert_eq!(Errable::<i32, i32>::from_value(1).collapse(), 1);
    assert_eq!(Errable::<i32, i32>::from_error(2).collapse(), 2);
}

#[test]
fn visit_runs_exactly_the_populated_action() {
    let success_hits = AtomicU32::new(0);
    let error_hits = AtomicU32::new(0);

    let errable: Errable<i32, &str> = Errable::from_error("oops");
    errable.visit(
        |_| {
            success_hits.fetch_add(1, Ordering::SeqCst);
        },
        |_| {
            error_hits.fetch_add(1, Ordering::SeqCst);
        },
    );

    assert_eq!(success_hits.load(Ordering::SeqCst), 0);
    assert_eq!(error_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn observers_agree_with_the_branch() {
    let ok: Errable<i32, &str> = Errable::from_value(5);
    assert!(ok.is_value());
    assert!(!ok.is_error());
    assert_eq!(ok.value(), Some(&5));
    assert_eq!(ok.error(), None);

    let err: Errable<i32, &str> = Errable::from_error("e");
    assert!(err.is_error());
    assert_eq!(err.value(), None);
    assert_eq!(err.error(), Some(&"e"));
}

#[test]
fn sum_interop_round_trips() {
    let errable: Errable<i32, &str> = Errable::from_value(3);
    assert_eq!(errable.as_sum(), &Sum2::First(3));

    let sum: Sum2<i32, &str> = errable.into_sum();
    let back = Errable::from_sum(sum);
    assert_eq!(back.into_value(), Some(3));

    let via_from: Errable<i32, &str> = Sum2::Second("e").into();
    assert_eq!(Sum2::from(via_from), Sum2::Second("e"));
}

#[test]
fn result_round_trips_through_errable() {
    let ok: Errable<i32, &str> = Ok(5).into();
    assert_eq!(Result::from(ok), Ok(5));

    let err: Errable<i32, &str> = Err("bad").into();
    assert_eq!(Result::from(err), Err("bad"));
}
