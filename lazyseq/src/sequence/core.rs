use std::fmt;

use crate::error::{Error, Result};

use super::iter::SequenceIter;
use super::traits::SequenceCore;
use super::variant::{Deferred, Delayed, Empty, Many};

/// A lazy, possibly infinite sequence.
///
/// A sequence is observed through three primitive queries:
/// [`is_empty`](Sequence::is_empty), [`first`](Sequence::first) and
/// [`rest`](Sequence::rest). It is a description of how to produce
/// elements rather than a container: nothing is computed until a query asks
/// for it, and whatever gets computed is remembered, so each position is
/// produced at most once.
///
/// Cloning a sequence is cheap and shares the already computed elements.
/// Sequences are single threaded; see [`crate::parallel`] for spreading work
/// over threads.
pub enum Sequence<T> {
    Empty(Empty),
    Many(Many<T>),
    Deferred(Deferred<T>),
    Delayed(Delayed<T>),
}

impl<T> Sequence<T> {
    /// The sequence without elements.
    pub fn empty() -> Self {
        Sequence::Empty(Empty)
    }

    /// Construct a sequence from its first element and a function producing
    /// the rest.
    ///
    /// `rest` runs at most once, the first time the remainder is queried.
    ///
    /// ```rust
    /// use lazyseq::Sequence;
    ///
    /// fn naturals(n: u64) -> Sequence<u64> {
    ///     Sequence::cons(n, move || naturals(n + 1))
    /// }
    ///
    /// let s = naturals(0);
    /// assert_eq!(s.first(), Ok(0));
    /// assert_eq!(s.rest().unwrap().first(), Ok(1));
    /// ```
    pub fn cons<F>(first: T, rest: F) -> Self
    where
        F: FnOnce() -> Sequence<T> + 'static,
    {
        Sequence::Deferred(Deferred::new(first, Box::new(rest)))
    }

    /// Like [`Sequence::cons`] with a first element that is computed on
    /// first request. The result is non-empty without running `first`.
    pub(crate) fn cons_lazy<E, F>(first: E, rest: F) -> Self
    where
        E: FnOnce() -> T + 'static,
        F: FnOnce() -> Sequence<T> + 'static,
    {
        Sequence::Deferred(Deferred::lazy(Box::new(first), Box::new(rest)))
    }

    /// Like [`Sequence::cons`] for a remainder that already exists.
    pub fn cons_with(first: T, rest: Sequence<T>) -> Self {
        Sequence::Deferred(Deferred::with_rest(first, rest))
    }

    /// A sequence computed entirely on first query.
    ///
    /// Unlike [`Sequence::cons`] not even the first element, or whether there
    /// is one, is known up front. The lazy combinators return delayed
    /// sequences so that building a pipeline runs none of its functions.
    pub fn delay<F>(producer: F) -> Self
    where
        F: FnOnce() -> Sequence<T> + 'static,
    {
        Sequence::Delayed(Delayed::new(Box::new(producer)))
    }
}

impl<T: Clone> Sequence<T> {
    /// Check whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        SequenceCore::is_empty(self)
    }

    /// The first element.
    ///
    /// The second element is not computed.
    pub fn first(&self) -> Result<T> {
        self.head().ok_or(Error::EmptySequence("first"))
    }

    /// All elements after the first.
    pub fn rest(&self) -> Result<Sequence<T>> {
        self.tail().ok_or(Error::EmptySequence("rest"))
    }

    /// Split into the first element and the remainder, without computing
    /// anything of the remainder.
    pub fn uncons(&self) -> Option<(T, Sequence<T>)> {
        SequenceCore::uncons(self)
    }

    /// Iterate over the elements, computing them as the iterator advances.
    pub fn iter(&self) -> SequenceIter<T> {
        SequenceIter::new(self.clone())
    }

    /// Compute every element into a vector. Does not return for infinite
    /// sequences.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Clone> SequenceCore<T> for Sequence<T> {
    fn is_empty(&self) -> bool {
        match self {
            Sequence::Empty(s) => SequenceCore::<T>::is_empty(s),
            Sequence::Many(s) => s.is_empty(),
            Sequence::Deferred(s) => s.is_empty(),
            Sequence::Delayed(s) => s.is_empty(),
        }
    }

    fn head(&self) -> Option<T> {
        match self {
            Sequence::Empty(s) => s.head(),
            Sequence::Many(s) => s.head(),
            Sequence::Deferred(s) => s.head(),
            Sequence::Delayed(s) => s.head(),
        }
    }

    fn tail(&self) -> Option<Sequence<T>> {
        match self {
            Sequence::Empty(s) => s.tail(),
            Sequence::Many(s) => s.tail(),
            Sequence::Deferred(s) => s.tail(),
            Sequence::Delayed(s) => s.tail(),
        }
    }

    fn uncons(&self) -> Option<(T, Sequence<T>)> {
        match self {
            Sequence::Empty(s) => s.uncons(),
            Sequence::Many(s) => s.uncons(),
            Sequence::Deferred(s) => s.uncons(),
            Sequence::Delayed(s) => s.uncons(),
        }
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        match self {
            Sequence::Empty(s) => Sequence::Empty(*s),
            Sequence::Many(s) => Sequence::Many(s.clone()),
            Sequence::Deferred(s) => Sequence::Deferred(s.clone()),
            Sequence::Delayed(s) => Sequence::Delayed(s.clone()),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::empty()
    }
}

// Shows the elements computed so far; never computes anything.
impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut current = self.clone();
        loop {
            current = match current {
                Sequence::Empty(_) => break,
                Sequence::Many(many) => {
                    list.entries(many.as_slice());
                    break;
                }
                Sequence::Deferred(deferred) => {
                    match deferred.peek_first() {
                        Some(first) => list.entry(first),
                        None => list.entry(&format_args!("_")),
                    };
                    match deferred.peek_rest() {
                        Some(rest) => rest,
                        None => {
                            list.entry(&format_args!(".."));
                            break;
                        }
                    }
                }
                Sequence::Delayed(delayed) => match delayed.peek() {
                    Some(resolved) => resolved,
                    None => {
                        list.entry(&format_args!(".."));
                        break;
                    }
                },
            };
        }
        list.finish()
    }
}

/// Element-wise comparison. Computes both sequences up to the first
/// difference, so two equal infinite sequences never compare.
impl<T: Clone + PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

/// Whether the sequence is empty.
pub fn is_empty<T: Clone>(sequence: &Sequence<T>) -> bool {
    sequence.is_empty()
}

/// The first element, or [`Error::EmptySequence`].
pub fn first<T: Clone>(sequence: &Sequence<T>) -> Result<T> {
    sequence.first()
}

/// The elements after the first, or [`Error::EmptySequence`].
pub fn rest<T: Clone>(sequence: &Sequence<T>) -> Result<Sequence<T>> {
    sequence.rest()
}

/// See [`Sequence::cons`].
pub fn cons<T, F>(first: T, rest: F) -> Sequence<T>
where
    F: FnOnce() -> Sequence<T> + 'static,
{
    Sequence::cons(first, rest)
}

/// See [`Sequence::cons_with`].
pub fn cons_with<T>(first: T, rest: Sequence<T>) -> Sequence<T> {
    Sequence::cons_with(first, rest)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counting(calls: Rc<Cell<usize>>, n: i32) -> Sequence<i32> {
        Sequence::cons(n, move || {
            calls.set(calls.get() + 1);
            counting(calls, n + 1)
        })
    }

    #[test]
    fn test_empty_queries_fail() {
        let s: Sequence<i32> = Sequence::empty();
        assert!(s.is_empty());
        assert_eq!(s.first(), Err(Error::EmptySequence("first")));
        assert_eq!(s.rest().unwrap_err(), Error::EmptySequence("rest"));
    }

    #[test]
    fn test_cons_does_not_run_producer() {
        let calls = Rc::new(Cell::new(0));
        let s = counting(calls.clone(), 0);
        assert!(!s.is_empty());
        assert_eq!(s.first(), Ok(0));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_rest_runs_producer_once() {
        let calls = Rc::new(Cell::new(0));
        let s = counting(calls.clone(), 0);
        let a = s.rest().unwrap();
        let b = s.rest().unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(a.first(), Ok(1));
        assert_eq!(b.first(), Ok(1));
        // a clone shares the computed remainder
        assert_eq!(s.clone().rest().unwrap().first(), Ok(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_delay_runs_nothing_until_queried() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let s = Sequence::delay(move || {
            counter.set(counter.get() + 1);
            Sequence::from(vec![1, 2, 3])
        });
        assert_eq!(calls.get(), 0);
        assert!(!s.is_empty());
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_cons_with() {
        let s = cons_with(1, cons_with(2, Sequence::empty()));
        assert_eq!(s.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_free_functions() {
        let s = cons(1, || Sequence::from(vec![2, 3]));
        assert!(!is_empty(&s));
        assert_eq!(first(&s), Ok(1));
        assert_eq!(rest(&s).unwrap().to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_debug_shows_computed_prefix() {
        let calls = Rc::new(Cell::new(0));
        let s = counting(calls, 0);
        assert_eq!(format!("{:?}", s), "[0, ..]");
        let _ = s.rest().unwrap().rest().unwrap();
        assert_eq!(format!("{:?}", s), "[0, 1, 2, ..]");
        assert_eq!(format!("{:?}", Sequence::from(vec![1, 2])), "[1, 2]");
        assert_eq!(format!("{:?}", Sequence::<i32>::empty()), "[]");
        assert_eq!(
            format!("{:?}", Sequence::delay(|| Sequence::from(vec![1]))),
            "[..]"
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            Sequence::from(vec![1, 2]),
            cons_with(1, cons_with(2, Sequence::empty()))
        );
        assert_ne!(Sequence::from(vec![1, 2]), Sequence::from(vec![1]));
    }

    #[test]
    fn test_drop_long_evaluated_chain() {
        fn from(n: u32) -> Sequence<u32> {
            Sequence::cons(n, move || from(n + 1))
        }
        let s = from(0);
        let mut current = s.clone();
        for _ in 0..1_000_000 {
            current = current.rest().unwrap();
        }
        assert_eq!(current.first(), Ok(1_000_000));
        drop(current);
        drop(s);
    }
}
