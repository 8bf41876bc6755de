//! Tests for the Fallible carrier.

use std::sync::atomic::{AtomicU32, Ordering};

use sum_rail::Fallible;

fn positive(n: i32) -> Fallible<i32, &'static str> {
    if n > 0 {
        Fallible::from_value(n)
    } else {
        Fallible::from_error("not positive")
    }
}

#[test]
fn then_binds_without_double_wrapping() {
    // from_value(v).then(f) == f(v)
    assert_eq!(Fallible::from_value(3).then(positive), positive(3));
    assert_eq!(Fallible::from_value(-3).then(positive), positive(-3));
}

#[test]
fn then_skips_the_error_branch() {
    let call_count = AtomicU32::new(0);

    let out = Fallible::<i32, &str>::from_error("upstream").then(|n| {
        call_count.fetch_add(1, Ordering::SeqCst);
        Fallible::<i32, &str>::from_value(n + 1)
    });

    assert_eq!(out.error(), Some(&"upstream"));
    assert_eq!(call_count.load(Ordering::SeqCst), 0); // Not called on error
}

#[test]
fn map_rewraps_a_plain_mapper() {
    let out = Fallible::<i32, &str>::from_value(20).map(|n| n + 1);
    assert_eq!(out.value(), Some(&21));

    let out = Fallible::<i32, &str>::from_error("e").map(|n| n + 1);
    assert_eq!(out.error(), Some(&"e"));
}

#[test]
fn on_error_skips_the_success_branch() {
    let call_count = AtomicU32::new(0);

    let out: Fallible<i32, usize> = Fallible::<i32, &str>::from_value(9).on_error(|e| {
        call_count.fetch_add(1, Ordering::SeqCst);
        Fallible::from_error(e.len())
    });

    assert_eq!(out.value(), Some(&9));
    assert_eq!(call_count.load(Ordering::SeqCst), 0); // Not called on success
}

#[test]
fn on_error_can_recover_into_a_value() {
    let out: Fallible<i32, usize> =
        Fallible::<i32, &str>::from_error("four").on_error(|_| Fallible::from_value(0));
    assert_eq!(out.value(), Some(&0));
}

#[test]
fn map_err_retypes_the_error() {
    let out = Fallible::<i32, &str>::from_error("boom").map_err(str::len);
    assert_eq!(out.error(), Some(&4));
}

#[test]
fn inspect_taps_the_success_branch_and_passes_through() {
    let seen = AtomicU32::new(0);

    let out = Fallible::<u32, &str>::from_value(7)
        .inspect(|n| {
            seen.store(*n, Ordering::SeqCst);
        })
        .map(|n| n + 1);

    assert_eq!(seen.load(Ordering::SeqCst), 7);
    assert_eq!(out.value(), Some(&8));
}

#[test]
fn inspect_skips_the_error_branch() {
    let call_count = AtomicU32::new(0);

    let out = Fallible::<u32, &str>::from_error("e").inspect(|_| {
        call_count.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(out.error(), Some(&"e"));
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[test]
fn inspect_err_taps_only_the_error_branch() {
    let call_count = AtomicU32::new(0);

    let out = Fallible::<u32, &str>::from_error("e").inspect_err(|_| {
        call_count.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(out.error(), Some(&"e"));
    assert_eq!(call_count.load(Ordering::SeqCst), 1);

    let out = Fallible::<u32, &str>::from_value(1).inspect_err(|_| {
        call_count.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(out.value(), Some(&1));
    assert_eq!(call_count.load(Ordering::SeqCst), 1); // Unchanged
}

#[test]
fn fold_eliminates_both_branches() {
    let ok: Fallible<i32, &str> = Fallible::from_value(2);
    assert_eq!(ok.fold(|n| n.to_string(), |e| format!("<{e}>")), "2");

    let err: Fallible<i32, &str> = Fallible::from_error("boom");
    assert_eq!(err.fold(|n| n.to_string(), |e| format!("<{e}>")), "<boom>");
}

#[test]
fn unwrap_or_else_maps_only_the_error() {
    assert_eq!(Fallible::<i32, &str>::from_value(7).unwrap_or_else(|_| 0), 7);
    assert_eq!(Fallible::<i32, &str>::from_error("xx").unwrap_or_else(|e| e.len() as i32), 2);
}

#[test]
fn unwrap_err_or_else_maps_only_the_value() {
    assert_eq!(Fallible::<i32, usize>::from_error(9).unwrap_err_or_else(|_| 0), 9);
    assert_eq!(Fallible::<i32, usize>::from_value(-1).unwrap_err_or_else(|n| n.unsigned_abs() as usize), 1);
}

#[test]
fn collapse_extracts_from_either_branch() {
    assert_eq!(Fallible::<i32, i32>::from_value(1).collapse(), 1);
    assert_eq!(Fallible::<i32, i32>::from_error(2).collapse(), 2);
}

#[test]
fn observers_agree_with_the_branch() {
    let ok: Fallible<i32, &str> = Fallible::from_value(5);
    assert!(ok.is_value());
    assert!(!ok.is_error());
    assert_eq!(ok.value(), Some(&5));
    assert_eq!(ok.error(), None);

    let err: Fallible<i32, &str> = Fallible::from_error("e");
    assert!(err.is_error());
    assert_eq!(err.error(), Some(&"e"));
}

#[test]
fn result_round_trips_through_fallible() {
    let ok: Fallible<i32, &str> = Ok(5).into();
    assert_eq!(Result::from(ok), Ok(5));

    let err: Fallible<i32, &str> = Err("bad").into();
    assert_eq!(Result::from(err), Err("bad"));
}

#[test]
fn conversion_helpers_preserve_the_branch() {
    use sum_rail::convert::{errable_to_fallible, fallible_to_errable};
    use sum_rail::Errable;

    let fallible = errable_to_fallible(Errable::<i32, &str>::from_error("e"));
    assert_eq!(fallible.error(), Some(&"e"));

    let errable = fallible_to_errable(Fallible::<i32, &str>::from_value(4));
    assert_eq!(errable.into_value(), Some(4));
}
