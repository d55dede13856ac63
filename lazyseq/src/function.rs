//! Small function helpers that come up when wiring combinators together.

/// `compose(outer, inner)(x) == outer(inner(x))`
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| outer(inner(x))
}

/// Swap the two arguments of `f`.
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}

pub fn identity<T>(x: T) -> T {
    x
}

pub fn fst<A, B>(pair: (A, B)) -> A {
    pair.0
}

pub fn snd<A, B>(pair: (A, B)) -> B {
    pair.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose() {
        let f = compose(|x: i32| x + 1, |y: i32| y * 2);
        assert_eq!(f(12), 25);
    }

    #[test]
    fn test_flip() {
        let left = |a: i32, _b: i32| a;
        assert_eq!(flip(left)(2, 3), 3);
        let minus = flip(|a: i32, b: i32| a - b);
        assert_eq!(minus(1, 10), 9);
    }

    #[test]
    fn test_pairs() {
        assert_eq!(identity("x"), "x");
        assert_eq!(fst((1, 'a')), 1);
        assert_eq!(snd((1, 'a')), 'a');
    }
}
