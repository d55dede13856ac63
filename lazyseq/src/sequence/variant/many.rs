use std::rc::Rc;

use crate::sequence::core::Sequence;
use crate::sequence::traits::SequenceCore;

/// A finite sequence backed by a shared slice.
///
/// The remainder of a `Many` is another `Many` over the same slice, one
/// position further along, so taking the rest never copies.
pub struct Many<T> {
    items: Rc<[T]>,
    start: usize,
}

impl<T> Many<T> {
    /// `None` if there are no items.
    pub(crate) fn new(items: Rc<[T]>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Many { items, start: 0 })
        }
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items[self.start..]
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len() - self.start
    }

    fn advance(&self) -> Sequence<T> {
        let start = self.start + 1;
        if start < self.items.len() {
            Sequence::Many(Many {
                items: self.items.clone(),
                start,
            })
        } else {
            Sequence::empty()
        }
    }
}

impl<T> Clone for Many<T> {
    fn clone(&self) -> Self {
        Many {
            items: self.items.clone(),
            start: self.start,
        }
    }
}

impl<T: Clone> SequenceCore<T> for Many<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn head(&self) -> Option<T> {
        self.items.get(self.start).cloned()
    }

    #[inline]
    fn tail(&self) -> Option<Sequence<T>> {
        Some(self.advance())
    }

    #[inline]
    fn uncons(&self) -> Option<(T, Sequence<T>)> {
        let first = self.items.get(self.start)?.clone();
        Some((first, self.advance()))
    }
}
