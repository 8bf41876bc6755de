//! Conversion helpers between `Result`, [`Sum2`], [`Errable`] and
//! [`Fallible`].
//!
//! The two result carriers are thin surfaces over the same sum engine, so
//! converting between them never inspects or copies the payload, only
//! re-wraps it. `Result` is the bridge type for interop with the rest of the
//! ecosystem; the `From` impls on each carrier cover the common direction and
//! these free functions name the rest.
//!
//! # Examples
//!
//! ```
//! use sum_rail::convert::{errable_to_fallible, fallible_to_errable};
//! use sum_rail::{Errable, Fallible};
//!
//! let errable: Errable<i32, &str> = Errable::from_value(42);
//! let fallible = errable_to_fallible(errable);
//! assert_eq!(fallible.value(), Some(&42));
//!
//! let back = fallible_to_errable(fallible);
//! assert_eq!(back.into_value(), Some(42));
//! ```

use crate::errable::Errable;
use crate::fallible::Fallible;
use crate::sum::Sum2;

/// Re-wraps an [`Errable`] as a [`Fallible`], preserving the branch.
#[inline]
pub fn errable_to_fallible<T, E>(errable: Errable<T, E>) -> Fallible<T, E> {
    errable.reduce(Fallible::from_value, Fallible::from_error)
}

/// Re-wraps a [`Fallible`] as an [`Errable`], preserving the branch.
#[inline]
pub fn fallible_to_errable<T, E>(fallible: Fallible<T, E>) -> Errable<T, E> {
    fallible.fold(Errable::from_value, Errable::from_error)
}

/// Views a [`Sum2`] as a `Result` with the first slot as `Ok`.
///
/// # Examples
///
/// ```
/// use sum_rail::convert::sum_to_result;
/// use sum_rail::Sum2;
///
/// let sum: Sum2<i32, &str> = Sum2::Second("late");
/// assert_eq!(sum_to_result(sum), Err("late"));
/// ```
#[inline]
pub fn sum_to_result<T, E>(sum: Sum2<T, E>) -> Result<T, E> {
    sum.into()
}

/// Wraps a `Result` as a [`Sum2`] with `Ok` in the first slot.
#[inline]
pub fn result_to_sum<T, E>(result: Result<T, E>) -> Sum2<T, E> {
    result.into()
}
