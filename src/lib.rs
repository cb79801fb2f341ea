//! A generic mathematical set, along with the standard algebra of sets.
//!
//! # Purpose
//! This crate provides [`Set`], an unordered collection of unique elements, and the operations
//! that make it behave like a set from mathematics rather than just a container: membership,
//! subset and superset relations, union, intersection, difference, symmetric difference and the
//! cartesian product.
//!
//! # Method
//! A Set is a thin layer over a hash map from each element to `()`, so only the keys carry any
//! meaning. Elements are required to implement [`Hash`](std::hash::Hash) and [`Eq`] statically,
//! which means there is no way to put an element in a Set that can't be compared.
//!
//! The algebra comes in two flavours:
//! - Eager functions in [`algebra`] (re-exported here), which take two `&Set`s and allocate a new
//!   Set for the result. The inputs are never modified.
//! - Lazy iterators, from methods like [`Set::union`], which borrow both Sets and yield references
//!   to the elements of the result without allocating.
//!
//! The cartesian product produces a Set of [`Pair`]s, which is just a Set like any other.
//!
//! # Error Handling
//! Nearly every operation on a Set is total: inserting an element that is already present or
//! removing one that isn't are simply no-ops. The only operations that can fail are the ones that
//! need an element to exist, [`Set::get_one`] and [`Set::take_one`], which return a [`SetError`].
//! Errors are enums with a variant for each kind of failure, rather than strings.
//!
//! # Features
//! - `ops`: Implements the binary operators for Sets (`|`, `&`, `-`, `^` and `*` for the product),
//!   along with the assigning versions.
//! - `print`: Enables [`print`], which writes a Set to the standard output.
//!
//! Both are enabled by default.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[macro_use]
mod macros;

pub mod algebra;
pub mod display;
pub mod error;
pub mod pair;
pub mod set;

#[cfg(test)]
pub(crate) mod util;

#[doc(inline)]
pub use algebra::{diff, equal, inter, prod, sym_diff, union};
#[cfg(feature = "print")]
#[doc(inline)]
pub use display::print;
#[doc(inline)]
pub use display::print_to;
#[doc(inline)]
pub use error::SetError;
#[doc(inline)]
pub use pair::Pair;
#[doc(inline)]
pub use set::Set;
