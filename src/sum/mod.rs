//! Closed tagged unions over two or three payload types.
//!
//! [`Sum2`] and [`Sum3`] carry exactly one value at a time; the enum tag is
//! the discriminant, so an out-of-range discriminant is unrepresentable and
//! the single-populated-slot invariant holds by construction.
//!
//! Every operation here derives from the fold ([`Sum2::reduce`] /
//! [`Sum3::reduce`]): mapping, probing, and visiting are thin pattern matches
//! that never mutate the receiver.

pub mod sum2;
pub mod sum3;

pub use sum2::Sum2;
pub use sum3::Sum3;
