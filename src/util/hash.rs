use std::hash::{BuildHasher, Hash, Hasher};

use crate::set::Set;

/// A hasher state which puts every value in the same bucket. The tag has no effect on hashing, it
/// only lets a test check which instance a Set ended up with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaggedState(pub u8);

impl BuildHasher for TaggedState {
    type Hasher = ConstantHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ConstantHasher
    }
}

#[derive(Debug)]
pub struct ConstantHasher;

impl Hasher for ConstantHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

/// Builds a Set of `items` using a [`TaggedState`] with the given `tag`.
pub fn tagged<T, I>(tag: u8, items: I) -> Set<T, TaggedState>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut set = Set::with_hasher(TaggedState(tag));
    set.extend(items);
    set
}
