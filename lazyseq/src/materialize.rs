//! Operations that consume a sequence.
//!
//! Apart from the short-circuiting [`any`], [`all`], [`elem`] and
//! [`not_elem`], these walk the whole input and do not return for infinite
//! sequences.
use std::cmp::Ordering;

use crate::fold::fold_left;
use crate::sequence::Sequence;

/// Compute every element into a vector.
pub fn to_vec<T: Clone>(sequence: &Sequence<T>) -> Vec<T> {
    sequence.to_vec()
}

/// The elements in ascending order.
pub fn sort<T: Clone + Ord>(sequence: &Sequence<T>) -> Vec<T> {
    let mut items = sequence.to_vec();
    items.sort();
    items
}

/// The elements ordered by `compare`. The sort is stable.
pub fn sort_by<T, F>(compare: F, sequence: &Sequence<T>) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut items = sequence.to_vec();
    items.sort_by(compare);
    items
}

/// The number of elements.
pub fn length<T: Clone>(sequence: &Sequence<T>) -> usize {
    fold_left(|count, _| count + 1, 0, sequence)
}

/// Whether any element satisfies `predicate`. Stops at the first that does.
pub fn any<T, P>(predicate: P, sequence: &Sequence<T>) -> bool
where
    T: Clone,
    P: FnMut(T) -> bool,
{
    sequence.iter().any(predicate)
}

/// Whether every element satisfies `predicate`. Stops at the first that
/// does not.
pub fn all<T, P>(predicate: P, sequence: &Sequence<T>) -> bool
where
    T: Clone,
    P: FnMut(T) -> bool,
{
    sequence.iter().all(predicate)
}

/// Whether `x` occurs in the sequence.
pub fn elem<T: Clone + PartialEq>(x: &T, sequence: &Sequence<T>) -> bool {
    any(|y| y == *x, sequence)
}

/// Whether `x` does not occur in the sequence.
pub fn not_elem<T: Clone + PartialEq>(x: &T, sequence: &Sequence<T>) -> bool {
    all(|y| y != *x, sequence)
}

/// Run `action` on every element, in order.
pub fn consume<T, F>(action: F, sequence: &Sequence<T>)
where
    T: Clone,
    F: FnMut(T),
{
    sequence.iter().for_each(action)
}
