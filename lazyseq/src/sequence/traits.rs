use super::core::Sequence;

/// The core sequence interface: every sequence variant implements this.
///
/// `Sequence` dispatches the primitive queries to its variants through this
/// trait, and everything else in the crate is built on top of those queries.
pub(crate) trait SequenceCore<T: Clone> {
    /// Check whether the sequence has no elements
    fn is_empty(&self) -> bool;

    /// The first element, if any. Must not compute the second one.
    fn head(&self) -> Option<T>;

    /// The remaining sequence, if any, with its own first element computed.
    fn tail(&self) -> Option<Sequence<T>>;

    /// Split into the first element and a remainder that has not been
    /// computed yet.
    fn uncons(&self) -> Option<(T, Sequence<T>)>;
}
