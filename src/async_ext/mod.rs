//! Async combinators for [`Errable`](crate::Errable) and
//! [`Fallible`](crate::Fallible) receivers.
//!
//! The composition rule is implemented once and everything else derives from
//! it: *await the receiver, dispatch synchronously on the resolved branch,
//! and await the chosen transform if it is itself async*. [`Dispatch`] is
//! that primitive for synchronous transforms; the extension traits stack the
//! second await on top for asynchronous ones.
//!
//! Nothing here spawns or fans out; combinators only sequence. A cancelled
//! or panicking inner future propagates through the runtime's normal channel
//! rather than being converted into an error payload.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! sum-rail = { version = "0.1", features = ["async"] }
//! ```

mod dispatch;
mod errable_ext;
mod fallible_ext;

#[cfg(feature = "tracing")]
mod tracing_ext;

pub use dispatch::Dispatch;
pub use errable_ext::{ErrableFutureCollapseExt, ErrableFutureExt};
pub use fallible_ext::{FallibleFutureCollapseExt, FallibleFutureExt};

#[cfg(feature = "tracing")]
pub use tracing_ext::{ErrorBranch, TracedFuture, TracedFutureExt};
