use std::fmt::{self, Debug, Formatter};

use derive_more::{Display, From};

/// An ordered pair of two values, used as the element type of a cartesian product.
///
/// Two pairs are equal only if both of their components are equal, in order. Because of this,
/// `Pair(a, b)` and `Pair(b, a)` are different elements unless `a == b`.
///
/// Pairs are immutable once created, use [`Pair::into_inner`] to take the components back.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, From)]
#[display("({_0}, {_1})")]
pub struct Pair<A, B>(A, B);

impl<A, B> Pair<A, B> {
    /// Creates a Pair from its left and right components.
    pub const fn new(first: A, second: B) -> Pair<A, B> {
        Pair(first, second)
    }

    /// Returns a reference to the left component.
    pub const fn first(&self) -> &A {
        &self.0
    }

    /// Returns a reference to the right component.
    pub const fn second(&self) -> &B {
        &self.1
    }

    /// Consumes the Pair, returning its components as a tuple.
    pub fn into_inner(self) -> (A, B) {
        (self.0, self.1)
    }

    /// Creates a new Pair with the components in reverse order.
    pub fn swap(self) -> Pair<B, A> {
        Pair(self.1, self.0)
    }

    /// Borrows both components, without consuming the Pair.
    pub const fn as_ref(&self) -> Pair<&A, &B> {
        Pair(&self.0, &self.1)
    }
}

impl<A: Clone, B: Clone> Pair<&A, &B> {
    /// Clones both borrowed components into an owned Pair.
    pub fn cloned(self) -> Pair<A, B> {
        Pair(self.0.clone(), self.1.clone())
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(value: Pair<A, B>) -> Self {
        value.into_inner()
    }
}

impl<A: Debug, B: Debug> Debug for Pair<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Matches the formatting of a plain tuple.
        f.debug_tuple("")
            .field(&self.0)
            .field(&self.1)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_order() {
        let pair = Pair::new(1, "x");
        assert_eq!(*pair.first(), 1);
        assert_eq!(*pair.second(), "x");
        assert_ne!(
            Pair::new(1, 2), Pair::new(2, 1),
            "Pairs with swapped components should be distinct."
        );
        assert_eq!(Pair::new(1, 2).swap(), Pair::new(2, 1));
    }

    #[test]
    fn test_conversions() {
        let pair: Pair<u8, char> = (3, 'c').into();
        assert_eq!(pair, Pair::new(3, 'c'));
        assert_eq!(<(u8, char)>::from(pair), (3, 'c'));
        assert_eq!(pair.as_ref().cloned(), pair);
    }

    #[test]
    fn test_formatting() {
        let pair = Pair::new(1, "x");
        assert_eq!(format!("{pair}"), "(1, x)");
        assert_eq!(
            format!("{pair:?}"), "(1, \"x\")",
            "Debug output should quote string components like a tuple."
        );
    }
}
