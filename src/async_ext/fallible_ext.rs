//! Extension traits for `Future<Output = Fallible<T, E>>`.

use core::future::Future;

use crate::fallible::Fallible;

use super::dispatch::Dispatch;

/// Combinators over a pending [`Fallible`].
///
/// Mirrors the inherent [`Fallible`] surface for pending receivers, so a
/// validate-process-render pipeline reads identically whether its head is
/// synchronous or an API call:
///
/// ```
/// use sum_rail::prelude_async::*;
/// use sum_rail::Fallible;
///
/// #[derive(Debug, PartialEq)]
/// struct Page(String);
///
/// async fn load(id: u32) -> Fallible<String, &'static str> {
///     if id == 0 { Fallible::from_error("missing") } else { Fallible::from_value(format!("record {id}")) }
/// }
///
/// async fn show(id: u32) -> Page {
///     load(id)
///         .map(|record| Page(record))
///         .map_err(|e| Page(format!("error: {e}")))
///         .collapse()
///         .await
/// }
/// ```
pub trait FallibleFutureExt<T, E>: Future<Output = Fallible<T, E>> + Sized {
    /// Chains a wrapping transform onto the success branch of the resolved
    /// receiver.
    fn then<U, F>(
        self,
        wrapping_mapper: F,
    ) -> Dispatch<Self, impl FnOnce(Fallible<T, E>) -> Fallible<U, E>>
    where
        F: FnOnce(T) -> Fallible<U, E>,
    {
        Dispatch::new(self, move |fallible: Fallible<T, E>| fallible.then(wrapping_mapper))
    }

    /// Maps the success branch of the resolved receiver with a plain mapper.
    fn map<U, F>(
        self,
        mapper: F,
    ) -> Dispatch<Self, impl FnOnce(Fallible<T, E>) -> Fallible<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        Dispatch::new(self, move |fallible: Fallible<T, E>| fallible.map(mapper))
    }

    /// Chains a wrapping transform onto the error branch of the resolved
    /// receiver.
    fn on_error<F2, F>(
        self,
        wrapping_mapper: F,
    ) -> Dispatch<Self, impl FnOnce(Fallible<T, E>) -> Fallible<T, F2>>
    where
        F: FnOnce(E) -> Fallible<T, F2>,
    {
        Dispatch::new(self, move |fallible: Fallible<T, E>| fallible.on_error(wrapping_mapper))
    }

    /// Maps the error branch of the resolved receiver with a plain mapper.
    fn map_err<F2, F>(
        self,
        mapper: F,
    ) -> Dispatch<Self, impl FnOnce(Fallible<T, E>) -> Fallible<T, F2>>
    where
        F: FnOnce(E) -> F2,
    {
        Dispatch::new(self, move |fallible: Fallible<T, E>| fallible.map_err(mapper))
    }

    /// Side effect on the success branch of the resolved receiver; the
    /// fallible passes through unchanged.
    fn inspect<F>(self, action: F) -> Dispatch<Self, impl FnOnce(Fallible<T, E>) -> Fallible<T, E>>
    where
        F: FnOnce(&T),
    {
        Dispatch::new(self, move |fallible: Fallible<T, E>| fallible.inspect(action))
    }

    /// Side effect on the error branch of the resolved receiver; the
    /// fallible passes through unchanged.
    fn inspect_err<F>(
        self,
        action: F,
    ) -> Dispatch<Self, impl FnOnce(Fallible<T, E>) -> Fallible<T, E>>
    where
        F: FnOnce(&E),
    {
        Dispatch::new(self, move |fallible: Fallible<T, E>| fallible.inspect_err(action))
    }

    /// Eliminates the resolved receiver into a single value.
    fn fold<R, FV, FE>(
        self,
        when_value: FV,
        when_error: FE,
    ) -> Dispatch<Self, impl FnOnce(Fallible<T, E>) -> R>
    where
        FV: FnOnce(T) -> R,
        FE: FnOnce(E) -> R,
    {
        Dispatch::new(self, move |fallible: Fallible<T, E>| fallible.fold(when_value, when_error))
    }

    /// One-sided eliminator: the resolved success value as-is, or the error
    /// mapped into a same-typed fallback.
    fn unwrap_or_else<FE>(
        self,
        when_error: FE,
    ) -> Dispatch<Self, impl FnOnce(Fallible<T, E>) -> T>
    where
        FE: FnOnce(E) -> T,
    {
        Dispatch::new(self, move |fallible: Fallible<T, E>| fallible.unwrap_or_else(when_error))
    }

    /// [`then`](Self::then) with an async wrapping transform: the receiver
    /// resolves first, then the transform's future is awaited.
    fn then_async<U, F, Fut2>(self, wrapping_mapper: F) -> impl Future<Output = Fallible<U, E>>
    where
        F: FnOnce(T) -> Fut2,
        Fut2: Future<Output = Fallible<U, E>>,
    {
        async move { self.await.then_async(wrapping_mapper).await }
    }

    /// [`map`](Self::map) with an async mapper.
    fn map_async<U, F, Fut2>(self, mapper: F) -> impl Future<Output = Fallible<U, E>>
    where
        F: FnOnce(T) -> Fut2,
        Fut2: Future<Output = U>,
    {
        async move { self.await.map_async(mapper).await }
    }

    /// [`on_error`](Self::on_error) with an async wrapping transform.
    fn on_error_async<F2, F, Fut2>(self, wrapping_mapper: F) -> impl Future<Output = Fallible<T, F2>>
    where
        F: FnOnce(E) -> Fut2,
        Fut2: Future<Output = Fallible<T, F2>>,
    {
        async move { self.await.on_error_async(wrapping_mapper).await }
    }

    /// [`map_err`](Self::map_err) with an async mapper.
    fn map_err_async<F2, F, Fut2>(self, mapper: F) -> impl Future<Output = Fallible<T, F2>>
    where
        F: FnOnce(E) -> Fut2,
        Fut2: Future<Output = F2>,
    {
        async move { self.await.map_err_async(mapper).await }
    }

    /// [`inspect`](Self::inspect) with an async action.
    fn inspect_async<F, Fut2>(self, action: F) -> impl Future<Output = Fallible<T, E>>
    where
        F: FnOnce(&T) -> Fut2,
        Fut2: Future<Output = ()>,
    {
        async move { self.await.inspect_async(action).await }
    }

    /// [`inspect_err`](Self::inspect_err) with an async action.
    fn inspect_err_async<F, Fut2>(self, action: F) -> impl Future<Output = Fallible<T, E>>
    where
        F: FnOnce(&E) -> Fut2,
        Fut2: Future<Output = ()>,
    {
        async move { self.await.inspect_err_async(action).await }
    }

    /// [`fold`](Self::fold) with async handlers on both branches.
    fn fold_async<R, FV, FE, FutV, FutE>(
        self,
        when_value: FV,
        when_error: FE,
    ) -> impl Future<Output = R>
    where
        FV: FnOnce(T) -> FutV,
        FutV: Future<Output = R>,
        FE: FnOnce(E) -> FutE,
        FutE: Future<Output = R>,
    {
        async move { self.await.fold_async(when_value, when_error).await }
    }
}

impl<Fut, T, E> FallibleFutureExt<T, E> for Fut where Fut: Future<Output = Fallible<T, E>> {}

/// The same-typed eliminator for pending receivers.
pub trait FallibleFutureCollapseExt<T>: Future<Output = Fallible<T, T>> + Sized {
    /// Collapses the resolved fallible into its payload, whichever branch
    /// holds it.
    fn collapse(self) -> Dispatch<Self, impl FnOnce(Fallible<T, T>) -> T> {
        Dispatch::new(self, |fallible: Fallible<T, T>| fallible.collapse())
    }
}

impl<Fut, T> FallibleFutureCollapseExt<T> for Fut where Fut: Future<Output = Fallible<T, T>> {}
