//! Lazy, possibly infinite sequences and a combinator library over them.
//!
//! A [`Sequence`] computes its elements only when they are asked for, and
//! remembers each element once computed. Combinators such as [`map`],
//! [`filter`] or [`zip_with`] build new sequences without running any of
//! the functions passed to them; those run position by position as the
//! result is queried. That makes infinite sequences ordinary values:
//!
//! ```rust
//! use lazyseq::{filter, iterate, map, take};
//!
//! let squares = map(|x: u64| x * x, iterate(|x: &u64| x + 1, 1));
//! let odd_squares = filter(|x: &u64| x % 2 == 1, squares);
//! assert_eq!(take(4, odd_squares).to_vec(), vec![1, 9, 25, 49]);
//! ```
//!
//! Operations that need at least one element, such as [`Sequence::first`],
//! [`fold_left1`] or [`cycle`], return [`error::Result`] and fail with
//! [`Error::EmptySequence`] on an empty sequence.
//!
//! Sequences are single threaded. [`parallel_map`] and [`ParallelMap`]
//! spread a map over worker threads for finite input.
pub mod combinator;
pub mod error;
pub mod fold;
pub mod function;
pub mod generator;
mod macros;
pub mod materialize;
pub mod parallel;
pub mod sequence;
pub mod window;

pub use crate::combinator::{
    concat, concat_all, concat_map, filter, intercalate, intersperse, map, reverse, unzip, zip,
    zip_with,
};
pub use crate::error::{Error, Result};
pub use crate::fold::{
    fold_left, fold_left1, fold_right, fold_right1, scan_left, scan_left1, scan_right, scan_right1,
};
pub use crate::function::{compose, flip, fst, identity, snd};
pub use crate::generator::{cycle, iterate, range, range_from, repeat};
pub use crate::materialize::{all, any, consume, elem, length, not_elem, sort, sort_by, to_vec};
pub use crate::parallel::{parallel_map, ParallelMap};
pub use crate::sequence::{cons, cons_with, first, is_empty, rest, Sequence, SequenceIter};
pub use crate::window::{break_, drop, drop_while, init, last, span, split_at, take, take_while};
