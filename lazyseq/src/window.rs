//! Prefixes, suffixes and splits.
use std::rc::Rc;

use crate::combinator::{map, zip};
use crate::error::{Error, Result};
use crate::function::snd;
use crate::generator::{range, range_from};
use crate::sequence::Sequence;

/// The first `n` elements, or all of them if there are fewer.
///
/// Never computes the element at position `n`, so taking a prefix of a
/// sequence that has nothing after it terminates even if asking for more
/// would not.
pub fn take<T>(n: i64, sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
{
    if n <= 0 {
        return Sequence::empty();
    }
    map(snd, zip(range(0, Some(n - 1), 1), sequence))
}

/// Everything after the first `n` elements.
pub fn drop<T>(n: i64, sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
{
    if n <= 0 {
        return sequence;
    }
    let indexed = zip(range_from(0i64), sequence);
    map(snd, drop_while(move |(index, _)| *index < n, indexed))
}

/// The longest prefix whose elements all satisfy `predicate`.
pub fn take_while<T, P>(predicate: P, sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    take_while_shared(Rc::new(predicate), sequence)
}

fn take_while_shared<T, P>(predicate: Rc<P>, sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    Sequence::delay(move || match sequence.uncons() {
        Some((first, rest)) if predicate(&first) => {
            Sequence::cons(first, move || take_while_shared(predicate, rest))
        }
        _ => Sequence::empty(),
    })
}

/// What remains after dropping the longest prefix that satisfies
/// `predicate`.
pub fn drop_while<T, P>(predicate: P, sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    drop_while_shared(Rc::new(predicate), sequence)
}

fn drop_while_shared<T, P>(predicate: Rc<P>, sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    Sequence::delay(move || {
        let mut current = sequence;
        loop {
            match current.uncons() {
                Some((first, rest)) if predicate(&first) => current = rest,
                _ => return current,
            }
        }
    })
}

/// `(take_while(predicate, sequence), drop_while(predicate, sequence))`.
///
/// The two halves share `sequence`, so elements in the prefix are computed
/// once even though both halves walk over them.
pub fn span<T, P>(predicate: P, sequence: Sequence<T>) -> (Sequence<T>, Sequence<T>)
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    let predicate = Rc::new(predicate);
    (
        take_while_shared(predicate.clone(), sequence.clone()),
        drop_while_shared(predicate, sequence),
    )
}

/// [`span`] with the predicate negated: splits before the first element
/// that satisfies `predicate`.
pub fn break_<T, P>(predicate: P, sequence: Sequence<T>) -> (Sequence<T>, Sequence<T>)
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    span(move |x: &T| !predicate(x), sequence)
}

/// `(take(n, sequence), drop(n, sequence))`.
pub fn split_at<T>(n: i64, sequence: Sequence<T>) -> (Sequence<T>, Sequence<T>)
where
    T: Clone + 'static,
{
    (take(n, sequence.clone()), drop(n, sequence))
}

/// All elements but the last.
///
/// Only the first element is computed up front, to fail on an empty
/// sequence; the rest follows lazily, one element behind.
pub fn init<T>(sequence: Sequence<T>) -> Result<Sequence<T>>
where
    T: Clone + 'static,
{
    let (first, rest) = sequence.uncons().ok_or(Error::EmptySequence("init"))?;
    Ok(init_from(first, rest))
}

fn init_from<T>(previous: T, sequence: Sequence<T>) -> Sequence<T>
where
    T: Clone + 'static,
{
    Sequence::delay(move || match sequence.uncons() {
        Some((first, rest)) => Sequence::cons(previous, move || init_from(first, rest)),
        None => Sequence::empty(),
    })
}

/// The last element. Does not return for infinite sequences.
pub fn last<T: Clone>(sequence: &Sequence<T>) -> Result<T> {
    sequence.iter().last().ok_or(Error::EmptySequence("last"))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::combinator::{concat, filter};
    use crate::generator::{iterate, repeat};

    fn numbers() -> Sequence<i32> {
        Sequence::from(vec![1, 2, 3, 4, 5, 6])
    }

    #[test]
    fn test_take() {
        assert_eq!(take(3, numbers()).to_vec(), vec![1, 2, 3]);
        assert_eq!(take(10, numbers()).to_vec(), numbers().to_vec());
        assert!(take(0, numbers()).is_empty());
        assert!(take(-2, numbers()).is_empty());
    }

    #[test]
    fn test_take_never_forces_next_position() {
        // the filter has exactly two matches; asking for a third would
        // search forever
        let small = filter(|x: &u64| *x < 2, iterate(|x: &u64| x + 1, 0));
        assert_eq!(take(2, small).to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_take_calls_upstream_only_for_prefix() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let s = iterate(
            move |x: &i32| {
                counter.set(counter.get() + 1);
                x + 1
            },
            0,
        );
        assert_eq!(take(3, s).to_vec(), vec![0, 1, 2]);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_drop() {
        let s = Sequence::from(vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(drop(3, s.clone()).to_vec(), vec![3, 2, 1]);
        assert_eq!(drop(0, s.clone()).to_vec(), s.to_vec());
        assert_eq!(drop(-1, s.clone()).to_vec(), s.to_vec());
        assert!(drop(10, s).is_empty());
    }

    #[test]
    fn test_drop_infinite() {
        assert_eq!(take(2, drop(5, repeat('x'))).to_vec(), vec!['x', 'x']);
    }

    #[test]
    fn test_take_drop_concat() {
        for n in 0..=6 {
            let s = numbers();
            let rest = s.clone();
            let joined = concat(take(n, s.clone()), move || drop(n, rest));
            assert_eq!(joined.to_vec(), s.to_vec());
        }
    }

    #[test]
    fn test_take_while() {
        assert_eq!(take_while(|x| *x <= 3, numbers()).to_vec(), vec![1, 2, 3]);
        assert!(take_while(|x| *x > 10, numbers()).is_empty());
    }

    #[test]
    fn test_drop_while() {
        let s = Sequence::from(vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(drop_while(|x| *x > 3, s).to_vec(), vec![3, 2, 1]);
        assert!(drop_while(|_: &i32| true, numbers()).is_empty());
    }

    #[test]
    fn test_span() {
        let (a, b) = span(|x| *x < 3, Sequence::from(vec![1, 2, 3, 4, 5]));
        assert_eq!(a.to_vec(), vec![1, 2]);
        assert_eq!(b.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn test_break() {
        let (a, b) = break_(|x| *x == 3, Sequence::from(vec![1, 2, 3, 4, 5]));
        assert_eq!(a.to_vec(), vec![1, 2]);
        assert_eq!(b.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn test_split_at() {
        let (a, b) = split_at(3, numbers());
        assert_eq!(a.to_vec(), vec![1, 2, 3]);
        assert_eq!(b.to_vec(), vec![4, 5, 6]);
    }

    #[test]
    fn test_init() {
        assert_eq!(init(Sequence::from(vec![1, 2, 3, 4])).unwrap().to_vec(), vec![1, 2, 3]);
        assert!(init(Sequence::from(vec![1])).unwrap().is_empty());
        assert_eq!(
            init(Sequence::<i32>::empty()).unwrap_err(),
            Error::EmptySequence("init")
        );
    }

    #[test]
    fn test_init_infinite() {
        let s = init(repeat(1)).unwrap();
        assert_eq!(take(3, s).to_vec(), vec![1, 1, 1]);
    }

    #[test]
    fn test_last() {
        assert_eq!(last(&Sequence::from(vec![1, 2, 3])), Ok(3));
        assert_eq!(last(&Sequence::<i32>::empty()), Err(Error::EmptySequence("last")));
    }
}
