//! Tracing integration: emit an event when a pending pipeline resolves to
//! its error branch.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! sum-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::errable::Errable;
use crate::fallible::Fallible;

mod private {
    pub trait Sealed {}

    impl<T, E> Sealed for crate::errable::Errable<T, E> {}
    impl<T, E> Sealed for crate::fallible::Fallible<T, E> {}
}

/// Branch probe implemented by both result carriers, so one wrapper serves
/// either.
///
/// This trait is sealed; only the crate's own carriers implement it.
pub trait ErrorBranch: private::Sealed {
    /// The error payload type.
    type Error;

    /// Borrows the error payload when the error branch is populated.
    fn error_branch(&self) -> Option<&Self::Error>;
}

impl<T, E> ErrorBranch for Errable<T, E> {
    type Error = E;

    #[inline]
    fn error_branch(&self) -> Option<&E> {
        self.error()
    }
}

impl<T, E> ErrorBranch for Fallible<T, E> {
    type Error = E;

    #[inline]
    fn error_branch(&self) -> Option<&E> {
        self.error()
    }
}

/// Extension trait attaching error-branch tracing to a pending pipeline.
///
/// # Examples
///
/// ```rust,ignore
/// use sum_rail::prelude_async::*;
/// use sum_rail::async_ext::TracedFutureExt;
///
/// async fn show(id: u32) -> Page {
///     load(id)
///         .traced("load record")
///         .map(render)
///         .map_err(render_error)
///         .collapse()
///         .await
/// }
/// ```
pub trait TracedFutureExt: Future + Sized
where
    Self::Output: ErrorBranch,
{
    /// Wraps the future so that resolving to the error branch emits a
    /// `tracing::warn!` event inside the span current at call time.
    ///
    /// The success branch emits nothing; the resolved value passes through
    /// unchanged either way.
    fn traced(self, operation: &'static str) -> TracedFuture<Self> {
        TracedFuture { inner: self, operation, span: Span::current() }
    }
}

impl<Fut> TracedFutureExt for Fut
where
    Fut: Future,
    Fut::Output: ErrorBranch,
{
}

pin_project! {
    /// Future wrapper created by [`TracedFutureExt::traced`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TracedFuture<F> {
        #[pin]
        inner: F,
        operation: &'static str,
        span: Span,
    }
}

impl<F> Future for TracedFuture<F>
where
    F: Future,
    F::Output: ErrorBranch,
    <F::Output as ErrorBranch>::Error: Debug,
{
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(resolved) => {
                if let Some(error) = resolved.error_branch() {
                    let _entered = this.span.enter();
                    tracing::warn!(
                        operation = *this.operation,
                        error = ?error,
                        "resolved to error branch"
                    );
                }
                Poll::Ready(resolved)
            },
            Poll::Pending => Poll::Pending,
        }
    }
}
