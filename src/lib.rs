//! A priority queue backed by a binary heap, ordered by a caller-supplied
//! comparator.

pub mod compare;
pub mod error;
pub mod priority_queue;

pub use compare::{by_key, Comparator, MaxOrder, MinOrder};
pub use error::Error;
pub use priority_queue::{BinaryHeap, Options};

#[cfg(test)]
mod testing;
