#[cfg(feature = "async")]
use core::future::Future;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sum::Sum2;

/// A success-or-error value with railway-style combinators.
///
/// `Errable<T, E>` is a [`Sum2<T, E>`] under a domain name: the first slot is
/// the success value, the second the error. It keeps the sum's API shape by
/// delegation and interconverts with `Sum2` freely; callers that want full
/// encapsulation instead should use [`Fallible`](crate::Fallible), which
/// hides its sum entirely.
///
/// Domain errors flow through combinator chains as ordinary payloads; nothing
/// here panics on the error branch. A chain ends with an explicit eliminator
/// ([`reduce`](Self::reduce), [`reduce_error`](Self::reduce_error) or
/// [`collapse`](Self::collapse)) that maps both branches to one type.
///
/// # Examples
///
/// ```
/// use sum_rail::Errable;
///
/// fn parse(input: &str) -> Errable<i32, String> {
///     match input.parse() {
///         Ok(n) => Errable::from_value(n),
///         Err(_) => Errable::from_error(format!("not a number: {input}")),
///     }
/// }
///
/// let doubled = parse("21").map_success(|n| n * 2);
/// assert_eq!(doubled.into_value(), Some(42));
///
/// let rendered = parse("x")
///     .map_success(|n| n.to_string())
///     .reduce_error(|e| format!("<{e}>"));
/// assert_eq!(rendered, "<not a number: x>");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct Errable<T, E>(Sum2<T, E>);

impl<T, E> Errable<T, E> {
    /// Wraps a success value.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self(Sum2::First(value))
    }

    /// Wraps an error value.
    #[inline]
    pub fn from_error(error: E) -> Self {
        Self(Sum2::Second(error))
    }

    /// Returns `true` if the success slot is populated.
    #[must_use]
    #[inline]
    pub fn is_value(&self) -> bool {
        self.0.is_first()
    }

    /// Returns `true` if the error slot is populated.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        self.0.is_second()
    }

    /// Borrows the success value, if present.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.0.as_first()
    }

    /// Borrows the error value, if present.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        self.0.as_second()
    }

    /// Extracts the success value, if present.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.0.into_first()
    }

    /// Extracts the error value, if present.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        self.0.into_second()
    }

    /// Borrows the underlying sum.
    #[must_use]
    #[inline]
    pub fn as_sum(&self) -> &Sum2<T, E> {
        &self.0
    }

    /// Unwraps into the underlying sum.
    #[inline]
    pub fn into_sum(self) -> Sum2<T, E> {
        self.0
    }

    /// Re-wraps a sum whose first slot is the success branch.
    #[inline]
    pub fn from_sum(sum: Sum2<T, E>) -> Self {
        Self(sum)
    }

    /// Side-effecting pattern match over both branches.
    ///
    /// Exactly one of the two actions runs, passed a reference to the held
    /// payload.
    #[inline]
    pub fn visit<FV, FE>(&self, on_success: FV, on_error: FE)
    where
        FV: FnOnce(&T),
        FE: FnOnce(&E),
    {
        self.0.visit(on_success, on_error);
    }

    /// Runs `transform` on the success value, flattening its result.
    ///
    /// This is monadic bind: `transform` itself returns an `Errable` and that
    /// result is returned as-is, never double-wrapped. An error passes
    /// through untouched and `transform` is not invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Errable;
    ///
    /// fn halve(n: i32) -> Errable<i32, &'static str> {
    ///     if n % 2 == 0 { Errable::from_value(n / 2) } else { Errable::from_error("odd") }
    /// }
    ///
    /// assert_eq!(Errable::from_value(42).on_success(halve), halve(42));
    /// assert!(Errable::from_value(7).on_success(halve).is_error());
    /// ```
    #[inline]
    pub fn on_success<U, F>(self, transform: F) -> Errable<U, E>
    where
        F: FnOnce(T) -> Errable<U, E>,
    {
        self.reduce(transform, Errable::from_error)
    }

    /// Alias for [`on_success`](Self::on_success).
    #[inline]
    pub fn then<U, F>(self, transform: F) -> Errable<U, E>
    where
        F: FnOnce(T) -> Errable<U, E>,
    {
        self.on_success(transform)
    }

    /// Runs a plain mapper on the success value, rewrapping its result.
    ///
    /// The mapper is assumed to never fail; use
    /// [`on_success`](Self::on_success) when the transform is itself fallible.
    #[inline]
    pub fn map_success<U, F>(self, mapper: F) -> Errable<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.on_success(|value| Errable::from_value(mapper(value)))
    }

    /// Runs `transform` on the error value, flattening its result.
    ///
    /// Mirror of [`on_success`](Self::on_success): a success passes through
    /// untouched (merely re-typed to the new error parameter) and `transform`
    /// is not invoked.
    #[inline]
    pub fn on_error<F2, F>(self, transform: F) -> Errable<T, F2>
    where
        F: FnOnce(E) -> Errable<T, F2>,
    {
        self.reduce(Errable::from_value, transform)
    }

    /// Runs a plain mapper on the error value, rewrapping its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Errable;
    ///
    /// let e: Errable<i32, &str> = Errable::from_error("boom");
    /// assert_eq!(e.map_error(str::len).into_error(), Some(4));
    /// ```
    #[inline]
    pub fn map_error<F2, F>(self, mapper: F) -> Errable<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        self.on_error(|error| Errable::from_error(mapper(error)))
    }

    /// Collapses both branches into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Errable;
    ///
    /// let ok: Errable<i32, &str> = Errable::from_value(2);
    /// assert_eq!(ok.reduce(|n| n * 10, |e| e.len() as i32), 20);
    /// ```
    #[inline]
    pub fn reduce<R, FV, FE>(self, on_success: FV, on_error: FE) -> R
    where
        FV: FnOnce(T) -> R,
        FE: FnOnce(E) -> R,
    {
        self.0.reduce(on_success, on_error)
    }

    /// One-sided eliminator: returns the success value as-is, or maps the
    /// error into a same-typed fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Errable;
    ///
    /// let e: Errable<i32, &str> = Errable::from_error("boom");
    /// assert_eq!(e.reduce_error(|e| e.len() as i32), 4);
    /// ```
    #[inline]
    pub fn reduce_error<FE>(self, on_error: FE) -> T
    where
        FE: FnOnce(E) -> T,
    {
        self.reduce(|value| value, on_error)
    }
}

impl<T> Errable<T, T> {
    /// Collapses a same-typed errable into its payload, whichever branch
    /// holds it.
    #[must_use]
    #[inline]
    pub fn collapse(self) -> T {
        self.0.collapse()
    }
}

/// Async-transform combinators. The composition rule is uniform across the
/// crate: dispatch synchronously on the discriminant, then await the chosen
/// branch's transform. See
/// [`ErrableFutureExt`](crate::async_ext::ErrableFutureExt) for the
/// async-receiver half of the grid.
#[cfg(feature = "async")]
impl<T, E> Errable<T, E> {
    /// [`on_success`](Self::on_success) with an async transform.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Errable;
    ///
    /// async fn lookup(id: u32) -> Errable<String, &'static str> {
    ///     Errable::from_value(format!("user-{id}"))
    /// }
    ///
    /// async fn example() -> Errable<String, &'static str> {
    ///     Errable::from_value(7).on_success_async(lookup).await
    /// }
    /// ```
    #[inline]
    pub async fn on_success_async<U, F, Fut>(self, transform: F) -> Errable<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Errable<U, E>>,
    {
        match self.0 {
            Sum2::First(value) => transform(value).await,
            Sum2::Second(error) => Errable::from_error(error),
        }
    }

    /// [`map_success`](Self::map_success) with an async mapper.
    #[inline]
    pub async fn map_success_async<U, F, Fut>(self, mapper: F) -> Errable<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.0 {
            Sum2::First(value) => Errable::from_value(mapper(value).await),
            Sum2::Second(error) => Errable::from_error(error),
        }
    }

    /// [`on_error`](Self::on_error) with an async transform.
    #[inline]
    pub async fn on_error_async<F2, F, Fut>(self, transform: F) -> Errable<T, F2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Errable<T, F2>>,
    {
        match self.0 {
            Sum2::First(value) => Errable::from_value(value),
            Sum2::Second(error) => transform(error).await,
        }
    }

    /// [`map_error`](Self::map_error) with an async mapper.
    #[inline]
    pub async fn map_error_async<F2, F, Fut>(self, mapper: F) -> Errable<T, F2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = F2>,
    {
        match self.0 {
            Sum2::First(value) => Errable::from_value(value),
            Sum2::Second(error) => Errable::from_error(mapper(error).await),
        }
    }

    /// [`reduce`](Self::reduce) with async handlers on both branches.
    #[inline]
    pub async fn reduce_async<R, FV, FE, FutV, FutE>(self, on_success: FV, on_error: FE) -> R
    where
        FV: FnOnce(T) -> FutV,
        FutV: Future<Output = R>,
        FE: FnOnce(E) -> FutE,
        FutE: Future<Output = R>,
    {
        match self.0 {
            Sum2::First(value) => on_success(value).await,
            Sum2::Second(error) => on_error(error).await,
        }
    }
}

impl<T, E> From<Sum2<T, E>> for Errable<T, E> {
    #[inline]
    fn from(sum: Sum2<T, E>) -> Self {
        Self::from_sum(sum)
    }
}

impl<T, E> From<Errable<T, E>> for Sum2<T, E> {
    #[inline]
    fn from(errable: Errable<T, E>) -> Self {
        errable.into_sum()
    }
}

impl<T, E> From<Result<T, E>> for Errable<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self(Sum2::from(result))
    }
}

impl<T, E> From<Errable<T, E>> for Result<T, E> {
    #[inline]
    fn from(errable: Errable<T, E>) -> Self {
        errable.into_sum().into()
    }
}
