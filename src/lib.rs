//! Closed tagged unions with railway-style success/error combinators.
//!
//! The crate is one engine and two surfaces: [`Sum2`] / [`Sum3`] are the
//! generic tagged unions, and [`Errable`] and [`Fallible`] specialize the
//! two-slot sum for success-or-error pipelines: `Errable` by delegation
//! (interconverts with its sum), `Fallible` by composition (hides it).
//! With the `async` feature the same combinators apply to pending receivers
//! and asynchronous transforms.
//!
//! # Examples
//!
//! ## Folding a sum
//!
//! ```
//! use sum_rail::Sum2;
//!
//! let input: Sum2<u32, String> = Sum2::Second("fallback".to_owned());
//! let text = input.reduce(|n| n.to_string(), |s| s);
//! assert_eq!(text, "fallback");
//! ```
//!
//! ## A success/error pipeline
//!
//! ```
//! use sum_rail::Fallible;
//!
//! fn validate(name: &str) -> Fallible<&str, String> {
//!     if name.len() >= 5 {
//!         Fallible::from_value(name)
//!     } else {
//!         Fallible::from_error(format!("too short: {name:?}"))
//!     }
//! }
//!
//! let rendered = validate("hi")
//!     .map(|name| format!("hello, {name}"))
//!     .map_err(|error| format!("rejected: {error}"))
//!     .collapse();
//! assert_eq!(rendered, "rejected: too short: \"hi\"");
//! ```
//!
//! ## Async chains (feature `async`, on by default)
//!
//! ```
//! use sum_rail::prelude_async::*;
//! use sum_rail::Errable;
//!
//! async fn fetch(id: u32) -> Errable<String, &'static str> {
//!     if id == 0 { Errable::from_error("not found") } else { Errable::from_value(format!("#{id}")) }
//! }
//!
//! async fn page(id: u32) -> String {
//!     fetch(id)
//!         .map_success(|row| format!("<p>{row}</p>"))
//!         .reduce_error(|e| format!("<p>{e}</p>"))
//!         .await
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversion helpers between the carriers and `Result`
pub mod convert;
/// The delegating success-or-error surface
pub mod errable;
/// The encapsulated success-or-error surface
pub mod fallible;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The tagged-union engine
pub mod sum;

/// Async combinator extensions (requires the `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - sync prelude plus the future extension traits
#[cfg(feature = "async")]
pub mod prelude_async;

pub use errable::Errable;
pub use fallible::Fallible;
pub use sum::{Sum2, Sum3};
