//! Extension traits for `Future<Output = Errable<T, E>>`.
//!
//! These mirror the inherent [`Errable`](crate::Errable) combinators for
//! pending receivers, so a chain reads the same whether its head is a value
//! or a future.

use core::future::Future;

use crate::errable::Errable;

use super::dispatch::Dispatch;

/// Combinators over a pending [`Errable`].
///
/// Synchronous transforms resolve to a [`Dispatch`]; asynchronous ones chain
/// a second await behind the receiver. Either way the transform runs at most
/// once, only after the receiver resolves, and only for its own branch.
///
/// # Examples
///
/// ```
/// use sum_rail::prelude_async::*;
/// use sum_rail::Errable;
///
/// async fn load(id: u32) -> Errable<String, &'static str> {
///     if id == 0 { Errable::from_error("no such row") } else { Errable::from_value(format!("row {id}")) }
/// }
///
/// async fn render(id: u32) -> String {
///     load(id)
///         .map_success(|row| format!("<p>{row}</p>"))
///         .reduce_error(|e| format!("<p class=\"error\">{e}</p>"))
///         .await
/// }
/// ```
pub trait ErrableFutureExt<T, E>: Future<Output = Errable<T, E>> + Sized {
    /// Binds a wrapping transform onto the success branch of the resolved
    /// receiver; the transform's `Errable` result is returned un-nested.
    fn on_success<U, F>(
        self,
        transform: F,
    ) -> Dispatch<Self, impl FnOnce(Errable<T, E>) -> Errable<U, E>>
    where
        F: FnOnce(T) -> Errable<U, E>,
    {
        Dispatch::new(self, move |errable: Errable<T, E>| errable.on_success(transform))
    }

    /// Alias for [`on_success`](Self::on_success).
    fn then<U, F>(
        self,
        transform: F,
    ) -> Dispatch<Self, impl FnOnce(Errable<T, E>) -> Errable<U, E>>
    where
        F: FnOnce(T) -> Errable<U, E>,
    {
        self.on_success(transform)
    }

    /// Maps the success branch of the resolved receiver with a plain mapper.
    fn map_success<U, F>(
        self,
        mapper: F,
    ) -> Dispatch<Self, impl FnOnce(Errable<T, E>) -> Errable<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        Dispatch::new(self, move |errable: Errable<T, E>| errable.map_success(mapper))
    }

    /// Binds a wrapping transform onto the error branch of the resolved
    /// receiver.
    fn on_error<F2, F>(
        self,
        transform: F,
    ) -> Dispatch<Self, impl FnOnce(Errable<T, E>) -> Errable<T, F2>>
    where
        F: FnOnce(E) -> Errable<T, F2>,
    {
        Dispatch::new(self, move |errable: Errable<T, E>| errable.on_error(transform))
    }

    /// Maps the error branch of the resolved receiver with a plain mapper.
    fn map_error<F2, F>(
        self,
        mapper: F,
    ) -> Dispatch<Self, impl FnOnce(Errable<T, E>) -> Errable<T, F2>>
    where
        F: FnOnce(E) -> F2,
    {
        Dispatch::new(self, move |errable: Errable<T, E>| errable.map_error(mapper))
    }

    /// Eliminates the resolved receiver into a single value.
    fn reduce<R, FV, FE>(
        self,
        on_success: FV,
        on_error: FE,
    ) -> Dispatch<Self, impl FnOnce(Errable<T, E>) -> R>
    where
        FV: FnOnce(T) -> R,
        FE: FnOnce(E) -> R,
    {
        Dispatch::new(self, move |errable: Errable<T, E>| errable.reduce(on_success, on_error))
    }

    /// One-sided eliminator: the resolved success value as-is, or the error
    /// mapped into a same-typed fallback.
    fn reduce_error<FE>(self, on_error: FE) -> Dispatch<Self, impl FnOnce(Errable<T, E>) -> T>
    where
        FE: FnOnce(E) -> T,
    {
        Dispatch::new(self, move |errable: Errable<T, E>| errable.reduce_error(on_error))
    }

    /// [`on_success`](Self::on_success) with an async transform: the receiver
    /// resolves first, then the transform's future is awaited.
    fn on_success_async<U, F, Fut2>(self, transform: F) -> impl Future<Output = Errable<U, E>>
    where
        F: FnOnce(T) -> Fut2,
        Fut2: Future<Output = Errable<U, E>>,
    {
        async move { self.await.on_success_async(transform).await }
    }

    /// [`map_success`](Self::map_success) with an async mapper.
    fn map_success_async<U, F, Fut2>(self, mapper: F) -> impl Future<Output = Errable<U, E>>
    where
        F: FnOnce(T) -> Fut2,
        Fut2: Future<Output = U>,
    {
        async move { self.await.map_success_async(mapper).await }
    }

    /// [`on_error`](Self::on_error) with an async transform.
    fn on_error_async<F2, F, Fut2>(self, transform: F) -> impl Future<Output = Errable<T, F2>>
    where
        F: FnOnce(E) -> Fut2,
        Fut2: Future<Output = Errable<T, F2>>,
    {
        async move { self.await.on_error_async(transform).await }
    }

    /// [`map_error`](Self::map_error) with an async mapper.
    fn map_error_async<F2, F, Fut2>(self, mapper: F) -> impl Future<Output = Errable<T, F2>>
    where
        F: FnOnce(E) -> Fut2,
        Fut2: Future<Output = F2>,
    {
        async move { self.await.map_error_async(mapper).await }
    }

    /// [`reduce`](Self::reduce) with async handlers on both branches.
    fn reduce_async<R, FV, FE, FutV, FutE>(
        self,
        on_success: FV,
        on_error: FE,
    ) -> impl Future<Output = R>
    where
        FV: FnOnce(T) -> FutV,
        FutV: Future<Output = R>,
        FE: FnOnce(E) -> FutE,
        FutE: Future<Output = R>,
    {
        async move { self.await.reduce_async(on_success, on_error).await }
    }
}

impl<Fut, T, E> ErrableFutureExt<T, E> for Fut where Fut: Future<Output = Errable<T, E>> {}

/// The same-typed eliminator for pending receivers.
pub trait ErrableFutureCollapseExt<T>: Future<Output = Errable<T, T>> + Sized {
    /// Collapses the resolved errable into its payload, whichever branch
    /// holds it.
    fn collapse(self) -> Dispatch<Self, impl FnOnce(Errable<T, T>) -> T> {
        Dispatch::new(self, |errable: Errable<T, T>| errable.collapse())
    }
}

impl<Fut, T> ErrableFutureCollapseExt<T> for Fut where Fut: Future<Output = Errable<T, T>> {}
