/// Creates a [`Set`](crate::Set) containing the provided elements. Duplicates are collapsed.
///
/// ```
/// # use set_algebra::set;
/// let set = set![1, 2, 2, 3];
/// assert_eq!(set.len(), 3);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Set::from([$($item),+])
    };
}
