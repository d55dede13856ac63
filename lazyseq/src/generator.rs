//! Infinite and arithmetic sequences.
use std::rc::Rc;

use num_traits::Num;

use crate::combinator::concat;
use crate::error::{Error, Result};
use crate::sequence::Sequence;

/// `x, f(x), f(f(x)), ...`
///
/// Each application of `f` happens when its position is first queried.
pub fn iterate<T, F>(f: F, x: T) -> Sequence<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    iterate_shared(Rc::new(f), x)
}

fn iterate_shared<T, F>(f: Rc<F>, x: T) -> Sequence<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    let current = x.clone();
    Sequence::cons(x, move || {
        let next = f(&current);
        iterate_shared(f, next)
    })
}

/// `x` forever.
pub fn repeat<T>(x: T) -> Sequence<T>
where
    T: Clone + 'static,
{
    Sequence::cons(x.clone(), move || repeat(x))
}

/// The elements of a finite, non-empty `sequence`, over and over.
///
/// Fails with [`Error::EmptySequence`] if `sequence` is empty. An infinite
/// `sequence` simply never repeats.
pub fn cycle<T>(sequence: Sequence<T>) -> Result<Sequence<T>>
where
    T: Clone + 'static,
{
    if sequence.is_empty() {
        return Err(Error::EmptySequence("cycle"));
    }
    Ok(cycle_nonempty(sequence))
}

fn cycle_nonempty<T>(sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
{
    concat(sequence.clone(), move || cycle_nonempty(sequence))
}

/// `start, start + step, start + 2 * step, ...`
///
/// With an `end` the sequence stops at the last value that does not pass
/// it: values up to and including `end` when `step` is positive, down to
/// and including `end` when `step` is negative. Without an `end` it is
/// infinite.
///
/// ```rust
/// use lazyseq::range;
///
/// assert_eq!(range(1, Some(10), 3).to_vec(), vec![1, 4, 7, 10]);
/// assert_eq!(range(5, Some(1), -2).to_vec(), vec![5, 3, 1]);
/// assert_eq!(range(0.0, Some(1.0), 0.5).to_vec(), vec![0.0, 0.5, 1.0]);
/// ```
pub fn range<N>(start: N, end: Option<N>, step: N) -> Sequence<N>
where
    N: Num + PartialOrd + Copy + 'static,
{
    let end = match end {
        Some(end) => end,
        None => return iterate(move |x: &N| *x + step, start),
    };
    let descending = step < N::zero();
    if (descending && start < end) || (!descending && start > end) {
        return Sequence::empty();
    }
    bounded(start, end, step)
}

fn bounded<N>(x: N, end: N, step: N) -> Sequence<N>
where
    N: Num + PartialOrd + Copy + 'static,
{
    Sequence::cons(x, move || match step_within(x, end, step) {
        Some(next) => bounded(next, end, step),
        None => Sequence::empty(),
    })
}

/// `x + step` if it does not pass `end`. Never computes a value outside
/// the range of `N`: the distance to `end` is taken only when it cannot
/// overflow, and the sum only when it cannot.
fn step_within<N>(x: N, end: N, step: N) -> Option<N>
where
    N: Num + PartialOrd + Copy,
{
    let zero = N::zero();
    if step < zero {
        if x <= zero {
            (end - x <= step).then(|| x + step)
        } else {
            let next = x + step;
            (next >= end).then_some(next)
        }
    } else if x >= zero {
        (end - x >= step).then(|| x + step)
    } else {
        let next = x + step;
        (next <= end).then_some(next)
    }
}

/// `start, start + 1, start + 2, ...`
pub fn range_from<N>(start: N) -> Sequence<N>
where
    N: Num + PartialOrd + Copy + 'static,
{
    range(start, None, N::one())
}
