//! Structural combinators.
//!
//! Each of these returns immediately without calling any of the functions
//! passed in; work happens position by position as the result is queried.
use std::rc::Rc;

use crate::sequence::Sequence;

/// Apply `f` to every element.
///
/// `f` runs once per position, when the element at that position is first
/// asked for. Checking for emptiness or skipping to the remainder does not
/// run it.
pub fn map<T, U, F>(f: F, sequence: Sequence<T>) -> Sequence<U>
where
    T: Clone + 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    map_shared(Rc::new(f), sequence)
}

fn map_shared<T, U, F>(f: Rc<F>, sequence: Sequence<T>) -> Sequence<U>
where
    T: Clone + 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    Sequence::delay(move || match sequence.uncons() {
        Some((first, rest)) => {
            let element = f.clone();
            Sequence::cons_lazy(move || element(first), move || map_shared(f, rest))
        }
        None => Sequence::empty(),
    })
}

/// Keep the elements for which `predicate` holds.
///
/// Finding the next element may skip over any number of rejected ones, so
/// querying a filtered infinite sequence with no further matches does not
/// return.
pub fn filter<T, P>(predicate: P, sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    filter_shared(Rc::new(predicate), sequence)
}

fn filter_shared<T, P>(predicate: Rc<P>, sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    Sequence::delay(move || {
        let mut current = sequence;
        while let Some((first, rest)) = current.uncons() {
            if predicate(&first) {
                return Sequence::cons(first, move || filter_shared(predicate, rest));
            }
            current = rest;
        }
        Sequence::empty()
    })
}

/// The elements of `sequence` followed by those of the sequence `next`
/// produces.
///
/// `next` runs once `sequence` is exhausted, and not before.
pub fn concat<T, F>(sequence: Sequence<T>, next: F) -> Sequence<T>
where
    T: Clone + 'static,
    F: FnOnce() -> Sequence<T> + 'static,
{
    Sequence::delay(move || match sequence.uncons() {
        Some((first, rest)) => Sequence::cons(first, move || concat(rest, next)),
        None => next(),
    })
}

/// Flatten a sequence of sequences by one level.
///
/// Empty inner sequences are skipped over; an infinite run of them makes
/// the query that reaches them not return.
pub fn concat_all<T>(sequences: Sequence<Sequence<T>>) -> Sequence<T>
where
    T: Clone + 'static,
{
    Sequence::delay(move || {
        let mut outer = sequences;
        while let Some((inner, rest)) = outer.uncons() {
            if let Some((first, inner_rest)) = inner.uncons() {
                return Sequence::cons(first, move || {
                    concat_all(Sequence::cons_with(inner_rest, rest))
                });
            }
            outer = rest;
        }
        Sequence::empty()
    })
}

/// Map every element to a sequence and concatenate the results.
pub fn concat_map<T, U, F>(f: F, sequence: Sequence<T>) -> Sequence<U>
where
    T: Clone + 'static,
    U: Clone + 'static,
    F: Fn(T) -> Sequence<U> + 'static,
{
    concat_all(map(f, sequence))
}

/// Combine elements pairwise with `f`.
///
/// The result ends as soon as either input does.
pub fn zip_with<A, B, U, F>(f: F, a: Sequence<A>, b: Sequence<B>) -> Sequence<U>
where
    A: Clone + 'static,
    B: Clone + 'static,
    U: 'static,
    F: Fn(A, B) -> U + 'static,
{
    zip_with_shared(Rc::new(f), a, b)
}

fn zip_with_shared<A, B, U, F>(f: Rc<F>, a: Sequence<A>, b: Sequence<B>) -> Sequence<U>
where
    A: Clone + 'static,
    B: Clone + 'static,
    U: 'static,
    F: Fn(A, B) -> U + 'static,
{
    Sequence::delay(move || {
        let (x, a_rest) = match a.uncons() {
            Some(split) => split,
            None => return Sequence::empty(),
        };
        let (y, b_rest) = match b.uncons() {
            Some(split) => split,
            None => return Sequence::empty(),
        };
        let element = f.clone();
        Sequence::cons_lazy(
            move || element(x, y),
            move || zip_with_shared(f, a_rest, b_rest),
        )
    })
}

/// Pair up elements. The result ends as soon as either input does.
pub fn zip<A, B>(a: Sequence<A>, b: Sequence<B>) -> Sequence<(A, B)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    zip_with(|x, y| (x, y), a, b)
}

/// Split a sequence of pairs into two sequences.
///
/// Unlike the other combinators this computes the whole input right away.
pub fn unzip<A, B>(pairs: Sequence<(A, B)>) -> (Sequence<A>, Sequence<B>)
where
    A: Clone,
    B: Clone,
{
    let (a, b): (Vec<A>, Vec<B>) = pairs.iter().unzip();
    (a.into(), b.into())
}

/// Put `separator` between consecutive elements.
pub fn intersperse<T>(separator: T, sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
{
    Sequence::delay(move || match sequence.uncons() {
        Some((first, rest)) => Sequence::cons(first, move || prepend_to_all(separator, rest)),
        None => Sequence::empty(),
    })
}

fn prepend_to_all<T>(separator: T, sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
{
    Sequence::delay(move || match sequence.uncons() {
        Some((first, rest)) => Sequence::cons(separator.clone(), move || {
            Sequence::cons(first, move || prepend_to_all(separator, rest))
        }),
        None => Sequence::empty(),
    })
}

/// Join sequences with `separator` between each pair.
///
/// ```rust
/// use lazyseq::{intercalate, seq, Sequence};
///
/// let words = seq![Sequence::from("hello"), Sequence::from("world")];
/// let joined: String = intercalate(Sequence::from(", "), words).iter().collect();
/// assert_eq!(joined, "hello, world");
/// ```
pub fn intercalate<T>(separator: Sequence<T>, sequences: Sequence<Sequence<T>>) -> Sequence<T>
where
    T: Clone + 'static,
{
    concat_all(intersperse(separator, sequences))
}

/// The elements in reverse order. Computes the whole input.
pub fn reverse<T: Clone>(sequence: Sequence<T>) -> Sequence<T> {
    let mut items = sequence.to_vec();
    items.reverse();
    items.into()
}
