use std::rc::Rc;

use super::core::Sequence;
use super::variant::Many;

impl<T> Sequence<T> {
    pub(crate) fn new(items: Rc<[T]>) -> Self {
        match Many::new(items) {
            Some(many) => Sequence::Many(many),
            None => Sequence::empty(),
        }
    }

    /// A sequence that pulls its elements from an iterator as they are
    /// queried.
    ///
    /// Unlike collecting, this works for iterators that never end. The
    /// iterator is not advanced until the sequence is first queried.
    pub fn from_iter_lazy<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
        T: 'static,
    {
        let iter = iter.into_iter();
        Sequence::delay(move || pull(iter))
    }
}

fn pull<T, I>(mut iter: I) -> Sequence<T>
where
    I: Iterator<Item = T> + 'static,
    T: 'static,
{
    match iter.next() {
        Some(first) => Sequence::cons(first, move || pull(iter)),
        None => Sequence::empty(),
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence::new(items.into())
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Sequence::new(items.into())
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Sequence::new(Rc::from(Vec::from(items)))
    }
}

// a string is a sequence of its characters
impl From<&str> for Sequence<char> {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl From<String> for Sequence<char> {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_from_vec() {
        let s: Sequence<i32> = vec![1, 2, 3].into();
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        let s: Sequence<i32> = Vec::new().into();
        assert!(matches!(s, Sequence::Empty(_)));
    }

    #[test]
    fn test_from_array_and_slice() {
        assert_eq!(Sequence::from([1, 2]).to_vec(), vec![1, 2]);
        assert_eq!(Sequence::from(&[3, 4][..]).to_vec(), vec![3, 4]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Sequence::from("héllo").to_vec(), vec!['h', 'é', 'l', 'l', 'o']);
        assert_eq!(Sequence::from(String::new()).to_vec(), Vec::<char>::new());
    }

    #[test]
    fn test_collect() {
        let s: Sequence<u8> = (1..=3).collect();
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_from_iter_lazy_pulls_on_demand() {
        let pulled = Rc::new(Cell::new(0));
        let counter = pulled.clone();
        let s = Sequence::from_iter_lazy((0..).inspect(move |_| counter.set(counter.get() + 1)));
        assert_eq!(pulled.get(), 0);
        assert_eq!(s.first(), Ok(0));
        assert_eq!(pulled.get(), 1);
        assert_eq!(s.iter().take(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(pulled.get(), 3);
        // already pulled elements are remembered
        assert_eq!(s.iter().take(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(pulled.get(), 3);
    }
}
