use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use super::{Difference, Intersection, IntoIter, Iter, Product, SymmetricDifference, Union};
use crate::display::Braced;
use crate::error::SetError;

/// An unordered collection of unique elements, which relies on the elements implementing [`Hash`]
/// and [`Eq`].
///
/// The iteration order of a Set is unspecified and may differ between two sets with the same
/// elements, or between two iterations of the same set after it has been modified.
///
/// It is a logic error for an element to be manipulated in a way that changes its hash while it is
/// in a Set. Because of this, Set's API prevents mutable access to its elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the Set.
/// - `m`: The number of elements in the other Set, for binary operations.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `get_one` | `O(1)`** |
/// | `is_subset` | `O(n)`* |
/// | `is_superset` | `O(m)`* |
///
/// \* Expected time, hash collisions add additional time.
///
/// \** Finding the first occupied bucket may need to skip empty ones.
pub struct Set<T: Hash + Eq, B: BuildHasher = RandomState> {
    // The unit type makes the map a plain key store with no space spent on values.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a new, empty Set. No memory is allocated until the first element is inserted.
    pub fn new() -> Set<T> {
        Set {
            inner: HashMap::new(),
        }
    }

    /// Creates an empty Set which can hold at least `cap` elements without reallocating.
    pub fn with_capacity(cap: usize) -> Set<T> {
        Set {
            inner: HashMap::with_capacity(cap),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
    /// Creates a new, empty Set which will use the provided `hasher`.
    pub const fn with_hasher(hasher: B) -> Set<T, B> {
        Set {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty Set with at least the provided `cap`acity, using `hasher`.
    pub fn with_capacity_and_hasher(cap: usize, hasher: B) -> Set<T, B> {
        Set {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the cardinality of the Set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the Set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the Set's hasher.
    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Adds `item` to the Set, returning true if it wasn't already present.
    ///
    /// If an equal element is already in the Set, it is kept and `item` is dropped.
    pub fn insert(&mut self, item: T) -> bool {
        // The map leaves an existing key untouched and only hands back the old value.
        self.inner.insert(item, ()).is_none()
    }

    /// Removes the element equal to `item`, returning it if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(removed, ())| removed)
    }

    /// Returns true if the Set contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        // Q is a borrowed form of T, where equality and hashing carry over the borrow.
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Returns a reference to an arbitrary element of the Set.
    ///
    /// No guarantee is made about which element is returned, or that the same element will be
    /// returned by subsequent calls.
    ///
    /// # Errors
    /// Returns [`SetError::EmptySet`] if the Set contains no elements.
    pub fn get_one(&self) -> Result<&T, SetError> {
        self.inner.keys().next().ok_or(SetError::EmptySet)
    }

    /// Removes an arbitrary element from the Set and returns it.
    ///
    /// # Errors
    /// Returns [`SetError::EmptySet`] if the Set contains no elements.
    pub fn take_one(&mut self) -> Result<T, SetError> {
        let mut first = true;
        // Entries not yielded by the extracting iterator stay in the map when it is dropped.
        self.inner.extract_if(|_, _| mem::replace(&mut first, false))
            .next()
            .map(|(item, ())| item)
            .ok_or(SetError::EmptySet)
    }

    /// Removes all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Keeps only the elements for which `pred` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut pred: F) {
        self.inner.retain(|item, _| pred(item))
    }

    /// Ensures that `extra` more elements can be inserted without reallocating.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Returns an iterator over all elements in the Set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.inner.keys())
    }

    /// Returns true if `other` contains every element of `self`. (`self ⊆ other`)
    ///
    /// The empty set is a subset of every set, including itself.
    pub fn is_subset(&self, other: &Set<T, B>) -> bool {
        self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains every element of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &Set<T, B>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` have no elements in common.
    pub fn is_disjoint(&self, other: &Set<T, B>) -> bool {
        self.intersection(other).next().is_none()
    }

    /// Creates a borrowed iterator over all elements that are in `self` but not `other`.
    /// (`self \ other`)
    pub fn difference<'a>(&'a self, other: &'a Set<T, B>) -> Difference<'a, T, B> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all elements that are in `self` or `other` but not both.
    /// (`self △ other`)
    pub fn symmetric_difference<'a>(
        &'a self,
        other: &'a Set<T, B>,
    ) -> SymmetricDifference<'a, T, B> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over all elements that are in both `self` and `other`.
    /// (`self ∩ other`)
    ///
    /// Only `self` is traversed, so this is cheapest when `self` is the smaller set.
    pub fn intersection<'a>(&'a self, other: &'a Set<T, B>) -> Intersection<'a, T, B> {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all elements that are in either `self` or `other`.
    /// (`self ∪ other`)
    pub fn union<'a>(&'a self, other: &'a Set<T, B>) -> Union<'a, T, B> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over every ordered pair of an element from `self` followed by an
    /// element from `other`. (`self × other`)
    pub fn product<'a, U, C>(&'a self, other: &'a Set<U, C>) -> Product<'a, T, U>
    where
        U: Hash + Eq,
        C: BuildHasher,
    {
        Product {
            outer: self.iter(),
            current: None,
            base: other.iter(),
            inner: other.iter(),
        }
    }

    /// Returns an adapter which displays the Set as `{ a b c }`, with each element in its [`Debug`]
    /// form.
    pub const fn braced(&self) -> Braced<'_, T, B> {
        Braced(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for Set<T, B> {
    fn default() -> Self {
        Set::with_hasher(B::default())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for Set<T, B> {
    fn clone(&self) -> Self {
        Set {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for Set<T, B> {
    fn eq(&self, other: &Self) -> bool {
        // Sets of equal size where one contains the other are mutual subsets.
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for Set<T, B> {}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(value: [T; N]) -> Self {
        let mut set = Set::with_capacity(N);
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for Set<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = Set::default();
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for Set<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_keys())
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a Set<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
