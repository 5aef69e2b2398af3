//! Generic containers backing the algorithm engines

pub mod adaptable_heap;
pub mod decorator;

pub use adaptable_heap::{AdaptablePriorityQueue, EntryHandle};
pub use decorator::Decorator;
