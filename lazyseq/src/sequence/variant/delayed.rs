use std::rc::Rc;

use crate::sequence::core::Sequence;
use crate::sequence::thunk::{Producer, Thunk};
use crate::sequence::traits::SequenceCore;

/// A sequence whose shape, including whether it is empty at all, is not
/// known until it is first queried.
///
/// Every primitive query resolves it first. Resolution runs the producer
/// at most once.
pub struct Delayed<T> {
    thunk: Rc<Thunk<T>>,
}

impl<T> Delayed<T> {
    pub(crate) fn new(producer: Producer<T>) -> Self {
        Delayed {
            thunk: Rc::new(Thunk::new(producer)),
        }
    }

    pub(crate) fn from_thunk(thunk: Rc<Thunk<T>>) -> Self {
        Delayed { thunk }
    }

    pub(crate) fn thunk(&self) -> &Rc<Thunk<T>> {
        &self.thunk
    }

    pub(crate) fn into_thunk(self) -> Rc<Thunk<T>> {
        self.thunk
    }

    /// The resolved sequence; never a `Delayed` itself.
    pub(crate) fn force(&self) -> Sequence<T> {
        self.thunk.force()
    }

    pub(crate) fn peek(&self) -> Option<Sequence<T>> {
        self.thunk.peek()
    }
}

impl<T> Clone for Delayed<T> {
    fn clone(&self) -> Self {
        Delayed {
            thunk: self.thunk.clone(),
        }
    }
}

impl<T: Clone> SequenceCore<T> for Delayed<T> {
    fn is_empty(&self) -> bool {
        self.force().is_empty()
    }

    fn head(&self) -> Option<T> {
        self.force().head()
    }

    fn tail(&self) -> Option<Sequence<T>> {
        self.force().tail()
    }

    fn uncons(&self) -> Option<(T, Sequence<T>)> {
        self.force().uncons()
    }
}
