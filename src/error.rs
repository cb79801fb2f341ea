use derive_more::{Display, Error, IsVariant};

/// The error type for operations which need a [`Set`](crate::Set) to contain at least one element.
///
/// All other set operations are total, so this enum only has a single variant.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum SetError {
    /// The set had no elements to return.
    #[display("Set is empty!")]
    EmptySet,
}
