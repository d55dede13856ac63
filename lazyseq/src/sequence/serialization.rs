use serde::ser::{Serialize, Serializer};

use super::core::Sequence;

// Serializes as a list of its elements. Computes the whole sequence, so it
// does not return for infinite sequences.
impl<T: Clone + Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
