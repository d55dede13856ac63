use std::cell::{Cell, OnceCell};
use std::rc::Rc;

use crate::sequence::core::Sequence;
use crate::sequence::thunk::{Producer, Thunk};
use crate::sequence::traits::SequenceCore;

use super::Delayed;

pub(crate) type Element<T> = Box<dyn FnOnce() -> T>;

struct Cons<T> {
    first: OnceCell<T>,
    // set only while `first` is not computed yet
    pending: Cell<Option<Element<T>>>,
    rest: Rc<Thunk<T>>,
}

/// A cons cell: a non-empty sequence whose first element and remainder are
/// each computed on first request, then remembered.
///
/// The first element is usually known up front; a lazy first element lets
/// a combinator report that it is non-empty without running its function.
pub struct Deferred<T> {
    cell: Rc<Cons<T>>,
}

impl<T> Deferred<T> {
    pub(crate) fn new(first: T, rest: Producer<T>) -> Self {
        Deferred {
            cell: Rc::new(Cons {
                first: OnceCell::from(first),
                pending: Cell::new(None),
                rest: Rc::new(Thunk::new(rest)),
            }),
        }
    }

    pub(crate) fn lazy(first: Element<T>, rest: Producer<T>) -> Self {
        Deferred {
            cell: Rc::new(Cons {
                first: OnceCell::new(),
                pending: Cell::new(Some(first)),
                rest: Rc::new(Thunk::new(rest)),
            }),
        }
    }

    pub(crate) fn with_rest(first: T, rest: Sequence<T>) -> Self {
        Deferred {
            cell: Rc::new(Cons {
                first: OnceCell::from(first),
                pending: Cell::new(None),
                rest: Rc::new(Thunk::ready(rest)),
            }),
        }
    }

    /// The first element, computing it if needed.
    pub(crate) fn first_ref(&self) -> &T {
        self.cell.first.get_or_init(|| match self.cell.pending.take() {
            Some(element) => element(),
            None => panic!(
                "sequence element queried while it is being produced \
                 (re-entrant query, or an earlier producer panicked)"
            ),
        })
    }

    /// The first element if it was computed already.
    pub(crate) fn peek_first(&self) -> Option<&T> {
        self.cell.first.get()
    }

    /// The remainder if it was computed already.
    pub(crate) fn peek_rest(&self) -> Option<Sequence<T>> {
        self.cell.rest.peek()
    }

    /// The remainder slot, provided nothing else shares this cell.
    pub(crate) fn into_rest(self) -> Option<Rc<Thunk<T>>> {
        Rc::try_unwrap(self.cell).ok().map(|cons| cons.rest)
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Deferred {
            cell: self.cell.clone(),
        }
    }
}

impl<T: Clone> SequenceCore<T> for Deferred<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn head(&self) -> Option<T> {
        Some(self.first_ref().clone())
    }

    fn tail(&self) -> Option<Sequence<T>> {
        Some(self.cell.rest.force())
    }

    fn uncons(&self) -> Option<(T, Sequence<T>)> {
        let rest = Sequence::Delayed(Delayed::from_thunk(self.cell.rest.clone()));
        Some((self.first_ref().clone(), rest))
    }
}
