//! Convenience re-exports for async pipelines.
//!
//! Pulls in the synchronous [`prelude`](crate::prelude) plus the future
//! extension traits, so a chain over a pending carrier needs one import:
//!
//! ```
//! use sum_rail::prelude_async::*;
//!
//! async fn greet(name_lookup: impl core::future::Future<Output = Errable<String, String>>) -> String {
//!     name_lookup
//!         .map_success(|name| format!("hello, {name}"))
//!         .collapse()
//!         .await
//! }
//! ```

pub use crate::async_ext::{
    Dispatch, ErrableFutureCollapseExt, ErrableFutureExt, FallibleFutureCollapseExt,
    FallibleFutureExt,
};
pub use crate::prelude::*;

#[cfg(feature = "tracing")]
pub use crate::async_ext::{ErrorBranch, TracedFuture, TracedFutureExt};
