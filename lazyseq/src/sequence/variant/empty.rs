use crate::sequence::core::Sequence;
use crate::sequence::traits::SequenceCore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Empty;

impl<T: Clone> SequenceCore<T> for Empty {
    #[inline]
    fn is_empty(&self) -> bool {
        true
    }

    #[inline]
    fn head(&self) -> Option<T> {
        None
    }

    #[inline]
    fn tail(&self) -> Option<Sequence<T>> {
        None
    }

    #[inline]
    fn uncons(&self) -> Option<(T, Sequence<T>)> {
        None
    }
}
