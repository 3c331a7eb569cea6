/// Error returned by [`min`] and [`remove_min`] when the queue holds no
/// entries.
///
/// This is the only failure mode the queue has, so callers can match on the
/// type alone to distinguish "empty" from anything else.
///
/// [`min`]: crate::SortedPriorityQueue::min
/// [`remove_min`]: crate::SortedPriorityQueue::remove_min
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("priority queue is empty")]
pub struct EmptyQueueError;
