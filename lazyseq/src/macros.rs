/// Build a sequence from a list of elements.
///
/// ```rust
/// use lazyseq::{seq, Sequence};
///
/// let s = seq![1, 2, 3];
/// assert_eq!(s.to_vec(), vec![1, 2, 3]);
/// let none: Sequence<u8> = seq![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::empty()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Sequence::from(vec![$($x),+])
    };
}
