//! Diagnostic printing for [`Set`]s.
//!
//! The printed form is `{ a b c }`, with each element in its [`Debug`] form and followed by a
//! single space. This means strings are double-quoted and chars single-quoted, while numbers and
//! most other types are printed as-is. The order of elements follows the Set's iteration order.
//!
//! This isn't a serialization format and can't be parsed back into a Set.

use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::io::{self, Write};

use crate::set::Set;


/// A wrapper which [`Display`]s a Set in braces, created by [`Set::braced`].
pub struct Braced<'a, T: Hash + Eq, B: BuildHasher>(pub(crate) &'a Set<T, B>);

impl<T: Hash + Eq + Debug, B: BuildHasher> Display for Braced<'_, T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for item in self.0 {
            write!(f, "{item:?} ")?;
        }
        write!(f, "}}")
    }
}

/// Writes `set` to `writer` in its braced form, followed by a newline.
///
/// # Errors
/// Returns any error produced by `writer`.
pub fn print_to<T, B, W>(set: &Set<T, B>, mut writer: W) -> io::Result<()>
where
    T: Hash + Eq + Debug,
    B: BuildHasher,
    W: Write,
{
    writeln!(writer, "{}", set.braced())
}

/// Prints `set` to the standard output in its braced form, followed by a newline.
///
/// # Panics
/// Panics if writing to the standard output fails, as with [`println!`].
#[cfg(feature = "print")]
pub fn print<T: Hash + Eq + Debug, B: BuildHasher>(set: &Set<T, B>) {
    println!("{}", set.braced());
}
