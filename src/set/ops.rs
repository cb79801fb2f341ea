use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, Sub, SubAssign};

use super::Set;
use crate::algebra;
use crate::pair::Pair;

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitOr for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        algebra::union(self, rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for Set<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitAnd for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        algebra::inter(self, rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for Set<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitXor for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        algebra::sym_diff(self, rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for Set<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if self.remove(&item).is_none() {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Sub for &Set<T, B> {
    type Output = Set<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        algebra::diff(self, rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for Set<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T, U, B, C> Mul<&Set<U, C>> for &Set<T, B>
where
    T: Hash + Eq + Clone,
    U: Hash + Eq + Clone,
    B: BuildHasher + Clone,
    C: BuildHasher,
{
    type Output = Set<Pair<T, U>, B>;

    fn mul(self, rhs: &Set<U, C>) -> Self::Output {
        algebra::prod(self, rhs)
    }
}
