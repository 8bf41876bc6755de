//! Convenience re-exports for the synchronous surface.
//!
//! ```
//! use sum_rail::prelude::*;
//!
//! let checked: Errable<u32, &str> = Errable::from_value(7);
//! assert_eq!(checked.reduce_error(|_| 0), 7);
//! ```

pub use crate::convert::{errable_to_fallible, fallible_to_errable, result_to_sum, sum_to_result};
pub use crate::errable::Errable;
pub use crate::fallible::Fallible;
pub use crate::sum::{Sum2, Sum3};
