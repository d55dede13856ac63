use thiserror::Error;

/// Lazy sequence error
///
/// Errors raised by functions passed into the combinators are not
/// represented here; they surface unchanged at the query that ran them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// An operation that needs at least one element was given an empty
    /// sequence.
    ///
    /// Carries the name of the operation, such as `first` or `fold_left1`.
    #[error("{0}: empty sequence")]
    EmptySequence(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
