//! Eager set algebra over [`Set`]s.
//!
//! Every function here takes its operands by reference and returns a newly allocated Set, leaving
//! the operands untouched. Elements are cloned into the result, so no storage is shared between
//! the inputs and the output. The result uses a clone of the first operand's hasher.
//!
//! For lazy versions which borrow the operands instead of allocating, see the iterator methods on
//! [`Set`], such as [`Set::union`]. With the `ops` feature, the binary operators on `&Set` forward
//! to the functions in this module.

use std::hash::{BuildHasher, Hash};

use crate::pair::Pair;
use crate::set::Set;


/// Returns true if `a` and `b` contain exactly the same elements.
///
/// Sets of different sizes are rejected before either is traversed, otherwise this is a single
/// subset check, which is enough for two sets of equal size.
pub fn equal<T: Hash + Eq, B: BuildHasher>(a: &Set<T, B>, b: &Set<T, B>) -> bool {
    a == b
}

/// Returns the union of two sets, `a ∪ b`.
pub fn union<T, B>(a: &Set<T, B>, b: &Set<T, B>) -> Set<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Clone,
{
    let mut set = Set::with_capacity_and_hasher(a.len().max(b.len()), a.hasher().clone());
    set.extend(a.iter().cloned());
    set.extend(b.iter().cloned());
    set
}

/// Returns the intersection of two sets, `a ∩ b`.
///
/// This iterates the first operand, so it is cheapest when `a` is the smaller set.
pub fn inter<T, B>(a: &Set<T, B>, b: &Set<T, B>) -> Set<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Clone,
{
    let mut set = Set::with_hasher(a.hasher().clone());
    set.extend(a.intersection(b).cloned());
    set
}

/// Returns the set difference `a \ b`: the elements of `a` which aren't in `b`.
pub fn diff<T, B>(a: &Set<T, B>, b: &Set<T, B>) -> Set<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Clone,
{
    let mut set = Set::with_hasher(a.hasher().clone());
    set.extend(a.difference(b).cloned());
    set
}

/// Returns the symmetric difference of two sets, `a △ b`: the elements which are in exactly one
/// of them.
pub fn sym_diff<T, B>(a: &Set<T, B>, b: &Set<T, B>) -> Set<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Clone,
{
    let mut set = a.clone();
    for item in b {
        if a.contains(item) {
            set.remove(item);
        } else {
            set.insert(item.clone());
        }
    }
    set
}

/// Returns the cartesian product `a × b`, as a Set of [`Pair`]s with the element from `a` first.
///
/// The result always has `a.len() * b.len()` elements.
pub fn prod<T, U, B, C>(a: &Set<T, B>, b: &Set<U, C>) -> Set<Pair<T, U>, B>
where
    T: Hash + Eq + Clone,
    U: Hash + Eq + Clone,
    B: BuildHasher + Clone,
    C: BuildHasher,
{
    let mut set = Set::with_capacity_and_hasher(a.len().saturating_mul(b.len()), a.hasher().clone());
    set.extend(a.product(b).map(Pair::cloned));
    set
}
