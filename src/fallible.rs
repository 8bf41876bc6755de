#[cfg(feature = "async")]
use core::future::Future;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sum::Sum2;

/// The result of an operation that can fail, with the sum fully encapsulated.
///
/// `Fallible<T, E>` carries the same success-or-error contract as
/// [`Errable`](crate::Errable) but hides its internal [`Sum2`] by
/// composition: callers only ever see the combinator surface, never the
/// underlying representation. Pick `Fallible` for API boundaries where the
/// representation must stay private; pick `Errable` where interop with
/// `Sum2` is wanted. Both are thin surfaces over the same engine.
///
/// A pipeline typically validates into a `Fallible`, chains
/// [`then`](Self::then) / [`map`](Self::map) transforms, taps the branches
/// with [`inspect`](Self::inspect) / [`inspect_err`](Self::inspect_err), and
/// ends by eliminating both branches into one presentation type:
///
/// ```
/// use sum_rail::Fallible;
///
/// fn validate(input: &str) -> Fallible<&str, String> {
///     if input.len() >= 5 {
///         Fallible::from_value(input)
///     } else {
///         Fallible::from_error(format!("too short: {input:?}"))
///     }
/// }
///
/// let page = validate("hello!")
///     .map(|input| input.to_uppercase())
///     .map_err(|error| format!("[error] {error}"))
///     .collapse();
/// assert_eq!(page, "HELLO!");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct Fallible<T, E> {
    inner: Sum2<T, E>,
}

impl<T, E> Fallible<T, E> {
    /// Wraps a success value.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self { inner: Sum2::First(value) }
    }

    /// Wraps an error value.
    #[inline]
    pub fn from_error(error: E) -> Self {
        Self { inner: Sum2::Second(error) }
    }

    /// Returns `true` if the success slot is populated.
    #[must_use]
    #[inline]
    pub fn is_value(&self) -> bool {
        self.inner.is_first()
    }

    /// Returns `true` if the error slot is populated.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        self.inner.is_second()
    }

    /// Borrows the success value, if present.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.inner.as_first()
    }

    /// Borrows the error value, if present.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        self.inner.as_second()
    }

    /// Chains a transform that can itself fail.
    ///
    /// On the success branch the transform runs and its `Fallible` result is
    /// returned as-is (no double-wrapping). On the error branch the error
    /// passes through and the transform is not invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Fallible;
    ///
    /// fn positive(n: i32) -> Fallible<i32, &'static str> {
    ///     if n > 0 { Fallible::from_value(n) } else { Fallible::from_error("not positive") }
    /// }
    ///
    /// assert!(Fallible::from_value(3).then(positive).is_value());
    /// assert!(Fallible::from_value(-3).then(positive).is_error());
    /// ```
    #[inline]
    pub fn then<U, F>(self, wrapping_mapper: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Fallible<U, E>,
    {
        self.fold(wrapping_mapper, Fallible::from_error)
    }

    /// Chains a transform that cannot fail, rewrapping its result.
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.then(|value| Fallible::from_value(mapper(value)))
    }

    /// Chains an error transform that may itself recover or re-fail.
    ///
    /// Mirror of [`then`](Self::then): the success branch passes through
    /// untouched and the transform is not invoked.
    #[inline]
    pub fn on_error<F2, F>(self, wrapping_mapper: F) -> Fallible<T, F2>
    where
        F: FnOnce(E) -> Fallible<T, F2>,
    {
        self.fold(Fallible::from_value, wrapping_mapper)
    }

    /// Transforms the error, rewrapping the result as the new error.
    #[inline]
    pub fn map_err<F2, F>(self, mapper: F) -> Fallible<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        self.on_error(|error| Fallible::from_error(mapper(error)))
    }

    /// Side effect on the success branch; the held value is not altered and
    /// the receiver is returned unchanged for further chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Fallible;
    ///
    /// let mut audited = Vec::new();
    /// let out: Fallible<i32, &str> = Fallible::from_value(7)
    ///     .inspect(|n| audited.push(*n))
    ///     .map(|n| n + 1);
    /// assert_eq!(audited, vec![7]);
    /// assert_eq!(out.value(), Some(&8));
    /// ```
    #[inline]
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Sum2::First(value) = &self.inner {
            action(value);
        }
        self
    }

    /// Side effect on the error branch; same passthrough contract as
    /// [`inspect`](Self::inspect).
    #[inline]
    pub fn inspect_err<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Sum2::Second(error) = &self.inner {
            action(error);
        }
        self
    }

    /// Eliminates both branches into one value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Fallible;
    ///
    /// let f: Fallible<i32, &str> = Fallible::from_error("boom");
    /// assert_eq!(f.fold(|n| n.to_string(), |e| format!("<{e}>")), "<boom>");
    /// ```
    #[inline]
    pub fn fold<R, FV, FE>(self, when_value: FV, when_error: FE) -> R
    where
        FV: FnOnce(T) -> R,
        FE: FnOnce(E) -> R,
    {
        self.inner.reduce(when_value, when_error)
    }

    /// One-sided eliminator: the success value as-is, or the error mapped
    /// into a same-typed fallback.
    #[inline]
    pub fn unwrap_or_else<FE>(self, when_error: FE) -> T
    where
        FE: FnOnce(E) -> T,
    {
        self.fold(|value| value, when_error)
    }

    /// One-sided eliminator for the error: the error value as-is, or the
    /// success mapped into a same-typed error.
    #[inline]
    pub fn unwrap_err_or_else<FV>(self, when_value: FV) -> E
    where
        FV: FnOnce(T) -> E,
    {
        self.fold(when_value, |error| error)
    }
}

impl<T> Fallible<T, T> {
    /// Collapses a same-typed fallible into its payload, whichever branch
    /// holds it.
    ///
    /// This is the usual final step of a pipeline that has already converted
    /// both branches to a common presentation type.
    #[must_use]
    #[inline]
    pub fn collapse(self) -> T {
        self.fold(|value| value, |error| error)
    }
}

/// Async-transform combinators: dispatch synchronously on the branch, then
/// await the chosen transform. The async-receiver half of the grid lives in
/// [`FallibleFutureExt`](crate::async_ext::FallibleFutureExt).
#[cfg(feature = "async")]
impl<T, E> Fallible<T, E> {
    /// [`then`](Self::then) with an async wrapping transform.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::Fallible;
    ///
    /// async fn persist(n: i32) -> Fallible<i32, &'static str> {
    ///     Fallible::from_value(n)
    /// }
    ///
    /// async fn example() -> Fallible<i32, &'static str> {
    ///     Fallible::from_value(7).then_async(persist).await
    /// }
    /// ```
    #[inline]
    pub async fn then_async<U, F, Fut>(self, wrapping_mapper: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Fallible<U, E>>,
    {
        match self.inner {
            Sum2::First(value) => wrapping_mapper(value).await,
            Sum2::Second(error) => Fallible::from_error(error),
        }
    }

    /// [`map`](Self::map) with an async mapper.
    #[inline]
    pub async fn map_async<U, F, Fut>(self, mapper: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.inner {
            Sum2::First(value) => Fallible::from_value(mapper(value).await),
            Sum2::Second(error) => Fallible::from_error(error),
        }
    }

    /// [`on_error`](Self::on_error) with an async wrapping transform.
    #[inline]
    pub async fn on_error_async<F2, F, Fut>(self, wrapping_mapper: F) -> Fallible<T, F2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Fallible<T, F2>>,
    {
        match self.inner {
            Sum2::First(value) => Fallible::from_value(value),
            Sum2::Second(error) => wrapping_mapper(error).await,
        }
    }

    /// [`map_err`](Self::map_err) with an async mapper.
    #[inline]
    pub async fn map_err_async<F2, F, Fut>(self, mapper: F) -> Fallible<T, F2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = F2>,
    {
        match self.inner {
            Sum2::First(value) => Fallible::from_value(value),
            Sum2::Second(error) => Fallible::from_error(mapper(error).await),
        }
    }

    /// [`inspect`](Self::inspect) with an async action.
    ///
    /// The action receives a reference; the future it builds must own what it
    /// needs, since the receiver is handed back afterwards.
    #[inline]
    pub async fn inspect_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Sum2::First(value) = &self.inner {
            action(value).await;
        }
        self
    }

    /// [`inspect_err`](Self::inspect_err) with an async action.
    #[inline]
    pub async fn inspect_err_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Sum2::Second(error) = &self.inner {
            action(error).await;
        }
        self
    }

    /// [`fold`](Self::fold) with async handlers on both branches.
    #[inline]
    pub async fn fold_async<R, FV, FE, FutV, FutE>(self, when_value: FV, when_error: FE) -> R
    where
        FV: FnOnce(T) -> FutV,
        FutV: Future<Output = R>,
        FE: FnOnce(E) -> FutE,
        FutE: Future<Output = R>,
    {
        match self.inner {
            Sum2::First(value) => when_value(value).await,
            Sum2::Second(error) => when_error(error).await,
        }
    }
}

impl<T, E> From<Result<T, E>> for Fallible<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self { inner: Sum2::from(result) }
    }
}

impl<T, E> From<Fallible<T, E>> for Result<T, E> {
    #[inline]
    fn from(fallible: Fallible<T, E>) -> Self {
        fallible.fold(Ok, Err)
    }
}
