//! Folds and scans.
//!
//! The folds compute their whole input. The right folds and right scans
//! work from a buffer of the input walked backwards, so they handle long
//! sequences without deep recursion; they still need finite input.
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::sequence::Sequence;

/// Combine elements from the left: `f(f(f(initial, x0), x1), x2)`.
pub fn fold_left<T, A, F>(f: F, initial: A, sequence: &Sequence<T>) -> A
where
    T: Clone,
    F: FnMut(A, T) -> A,
{
    sequence.iter().fold(initial, f)
}

/// Combine elements from the right: `f(x0, f(x1, f(x2, initial)))`.
pub fn fold_right<T, A, F>(mut f: F, initial: A, sequence: &Sequence<T>) -> A
where
    T: Clone,
    F: FnMut(T, A) -> A,
{
    sequence
        .to_vec()
        .into_iter()
        .rev()
        .fold(initial, |acc, x| f(x, acc))
}

/// [`fold_left`] seeded with the first element.
pub fn fold_left1<T, F>(f: F, sequence: &Sequence<T>) -> Result<T>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    let (first, rest) = sequence
        .uncons()
        .ok_or(Error::EmptySequence("fold_left1"))?;
    Ok(fold_left(f, first, &rest))
}

/// [`fold_right`] seeded with the first element, folding over the rest.
///
/// ```rust
/// use lazyseq::{fold_right1, seq, Sequence};
///
/// let s: Sequence<String> = seq!["a".to_string(), "b".to_string(), "c".to_string()];
/// assert_eq!(fold_right1(|x, acc| x + &acc, &s).unwrap(), "bca");
/// ```
pub fn fold_right1<T, F>(f: F, sequence: &Sequence<T>) -> Result<T>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    let (first, rest) = sequence
        .uncons()
        .ok_or(Error::EmptySequence("fold_right1"))?;
    Ok(fold_right(f, first, &rest))
}

/// Every intermediate result of [`fold_left`], starting with `initial`.
///
/// The result is lazy and one longer than the input; `f` runs when the
/// position it computes is queried.
pub fn scan_left<T, A, F>(f: F, initial: A, sequence: Sequence<T>) -> Sequence<A>
where
    T: Clone + 'static,
    A: Clone + 'static,
    F: Fn(A, T) -> A + 'static,
{
    scan_left_shared(Rc::new(f), initial, sequence)
}

fn scan_left_shared<T, A, F>(f: Rc<F>, acc: A, sequence: Sequence<T>) -> Sequence<A>
where
    T: Clone + 'static,
    A: Clone + 'static,
    F: Fn(A, T) -> A + 'static,
{
    Sequence::cons(acc.clone(), move || match sequence.uncons() {
        Some((first, rest)) => {
            let next = f(acc, first);
            scan_left_shared(f, next, rest)
        }
        None => Sequence::empty(),
    })
}

/// [`scan_left`] seeded with the first element.
///
/// Computes the first element right away to find out whether there is one.
pub fn scan_left1<T, F>(f: F, sequence: Sequence<T>) -> Result<Sequence<T>>
where
    T: Clone + 'static,
    F: Fn(T, T) -> T + 'static,
{
    let (first, rest) = sequence
        .uncons()
        .ok_or(Error::EmptySequence("scan_left1"))?;
    Ok(scan_left_shared(Rc::new(f), first, rest))
}

/// Every intermediate result of [`fold_right`], ending with `initial`.
pub fn scan_right<T, A, F>(f: F, initial: A, sequence: Sequence<T>) -> Sequence<A>
where
    T: Clone,
    A: Clone,
    F: FnMut(T, A) -> A,
{
    scan_right_from(f, initial, sequence.to_vec())
}

/// [`scan_right`] seeded with the last element.
pub fn scan_right1<T, F>(f: F, sequence: Sequence<T>) -> Result<Sequence<T>>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    let mut items = sequence.to_vec();
    let last = items.pop().ok_or(Error::EmptySequence("scan_right1"))?;
    Ok(scan_right_from(f, last, items))
}

fn scan_right_from<T, A, F>(mut f: F, initial: A, items: Vec<T>) -> Sequence<A>
where
    A: Clone,
    F: FnMut(T, A) -> A,
{
    let mut results = Vec::with_capacity(items.len() + 1);
    let mut acc = initial;
    results.push(acc.clone());
    for x in items.into_iter().rev() {
        acc = f(x, acc);
        results.push(acc.clone());
    }
    results.reverse();
    results.into()
}
