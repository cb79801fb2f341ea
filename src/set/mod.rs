//! A module containing [`Set`] and associated types.
//!
//! Some of these types provide owned and borrowed iteration over a set's elements while others are
//! lazy iterators over the result of set operations on two Sets. The eager versions of those
//! operations, which allocate a new Set, live in [`algebra`](crate::algebra).
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the
//! elements in place would cause a logic error.
//!
//! [`Set`] is also re-exported at the crate root.

mod iter;
#[cfg(feature = "ops")]
mod ops;
mod set;
mod tests;

pub use iter::*;
pub use set::*;
