use std::collections::hash_map::{IntoKeys, Keys};
use std::hash::{BuildHasher, Hash};
use std::iter::{Chain, FusedIterator};

use super::Set;
use crate::pair::Pair;

pub struct IntoIter<T> (
    pub(crate) IntoKeys<T, ()>,
);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

pub struct Iter<'a, T> (
    pub(crate) Keys<'a, T, ()>,
);

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

pub struct Difference<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a Set<T, B>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for Difference<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T: Hash + Eq, B: BuildHasher> FusedIterator for Difference<'_, T, B> {}

pub struct SymmetricDifference<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Chain<Difference<'a, T, B>, Difference<'a, T, B>>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for SymmetricDifference<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Hash + Eq, B: BuildHasher> FusedIterator for SymmetricDifference<'_, T, B> {}

pub struct Intersection<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a Set<T, B>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for Intersection<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && !self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T: Hash + Eq, B: BuildHasher> FusedIterator for Intersection<'_, T, B> {}

pub struct Union<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Chain<Iter<'a, T>, Difference<'a, T, B>>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for Union<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Hash + Eq, B: BuildHasher> FusedIterator for Union<'_, T, B> {}

/// An iterator over the cartesian product of two sets, created by [`Set::product`].
///
/// For each element of the left set, every element of the right set is visited before moving on.
pub struct Product<'a, T, U> {
    pub(crate) outer: Iter<'a, T>,
    pub(crate) current: Option<&'a T>,
    // A fresh copy of the right iterator, used to restart it for each left element.
    pub(crate) base: Iter<'a, U>,
    pub(crate) inner: Iter<'a, U>,
}

impl<'a, T, U> Iterator for Product<'a, T, U> {
    type Item = Pair<&'a T, &'a U>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(left) = self.current
                && let Some(right) = self.inner.next()
            {
                return Some(Pair::new(left, right));
            }

            self.current = Some(self.outer.next()?);
            self.inner = self.base.clone();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let current = match self.current {
            Some(_) => self.inner.len(),
            None => 0,
        };
        let remaining = self.outer.len()
            .checked_mul(self.base.len())
            .and_then(|rest| rest.checked_add(current));

        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

impl<T, U> FusedIterator for Product<'_, T, U> {}
