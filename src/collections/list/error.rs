use derive_more::{Display, Error};

/// The error returned by operations that need at least one element, such as
/// [`max`](super::QueryableList::max), when invoked on an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Operation requires at least one element, but the collection is empty!")]
pub struct EmptyCollection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}
