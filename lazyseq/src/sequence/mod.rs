//! The sequence type and its primitive queries.
//!
//! A [`Sequence`] is one of a small number of variants (see [`variant`]),
//! all of which answer the same primitive queries. Everything else in the
//! crate is built on `is_empty`, `first`, `rest` and `cons`.
mod core;
mod creation;
mod iter;
#[cfg(feature = "serde")]
mod serialization;
mod thunk;
mod traits;
pub mod variant;

pub use self::core::{cons, cons_with, first, is_empty, rest, Sequence};
pub use iter::SequenceIter;
