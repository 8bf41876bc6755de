//! The await-then-dispatch future primitive.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

pin_project! {
    /// Awaits a receiver, then applies a synchronous function to the resolved
    /// value.
    ///
    /// Every async-receiver combinator with a synchronous transform returns a
    /// `Dispatch`: the combinator bakes its branch logic into the dispatch
    /// closure and this future sequences "resolve the receiver, then run the
    /// closure exactly once".
    ///
    /// # Cancel Safety
    ///
    /// `Dispatch` is cancel-safe if the inner future is cancel-safe; the
    /// dispatch closure only runs when `poll` returns `Poll::Ready`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sum_rail::prelude_async::*;
    /// use sum_rail::Errable;
    ///
    /// async fn example() -> Errable<i32, &'static str> {
    ///     async { Errable::from_value(20) }
    ///         .map_success(|n| n + 1)
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct Dispatch<Fut, F> {
        #[pin]
        future: Fut,
        dispatch: Option<F>,
    }
}

impl<Fut, F> Dispatch<Fut, F> {
    /// Creates a new `Dispatch` over the given receiver and dispatch closure.
    #[inline]
    pub fn new(future: Fut, dispatch: F) -> Self {
        Self { future, dispatch: Some(dispatch) }
    }
}

impl<Fut, F, R> Future for Dispatch<Fut, F>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> R,
{
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|resolved| {
            let dispatch = this
                .dispatch
                .take()
                .expect("Dispatch polled after completion; this is a bug");
            dispatch(resolved)
        })
    }
}

impl<Fut, F, R> FusedFuture for Dispatch<Fut, F>
where
    Fut: FusedFuture,
    F: FnOnce(Fut::Output) -> R,
{
    fn is_terminated(&self) -> bool {
        // The closure is taken on completion, so check it as well
        self.dispatch.is_none() || self.future.is_terminated()
    }
}
