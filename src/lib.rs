mod entry;
pub use entry::Entry;

mod error;
pub use error::EmptyQueueError;

// core queue impl
mod queue;
pub use queue::{IntoIter, Iter, Key, SortedPriorityQueue};
