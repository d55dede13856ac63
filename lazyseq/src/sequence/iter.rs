use std::iter::FusedIterator;

use super::core::Sequence;

/// An iterator over the elements of a [`Sequence`].
///
/// Each call to `next` computes one more element; the iterator holds only
/// the remainder it has not yielded yet, so elements already iterated over
/// can be freed if nothing else refers to them.
pub struct SequenceIter<T> {
    remaining: Sequence<T>,
}

impl<T> SequenceIter<T> {
    pub(crate) fn new(sequence: Sequence<T>) -> Self {
        SequenceIter {
            remaining: sequence,
        }
    }
}

impl<T: Clone> Iterator for SequenceIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (first, rest) = self.remaining.uncons()?;
        self.remaining = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.remaining {
            Sequence::Empty(_) => (0, Some(0)),
            Sequence::Many(many) => (many.len(), Some(many.len())),
            _ => (0, None),
        }
    }
}

impl<T: Clone> FusedIterator for SequenceIter<T> {}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIter::new(self)
    }
}

impl<T: Clone> IntoIterator for &Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_hint() {
        let s = Sequence::from(vec![1, 2, 3]);
        let mut iter = s.iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        let lazy = Sequence::cons(1, Sequence::empty);
        assert_eq!(lazy.iter().size_hint(), (0, None));
    }

    #[test]
    fn test_for_loop() {
        let s = Sequence::from(vec!['a', 'b']);
        let mut seen = String::new();
        for c in &s {
            seen.push(c);
        }
        for c in s {
            seen.push(c);
        }
        assert_eq!(seen, "abab");
    }

    #[test]
    fn test_infinite_prefix() {
        fn ones() -> Sequence<u8> {
            Sequence::cons(1, ones)
        }
        assert_eq!(ones().iter().take(4).collect::<Vec<_>>(), vec![1, 1, 1, 1]);
    }
}
