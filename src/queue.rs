use std::collections::VecDeque;

use crate::{EmptyQueueError, Entry};

/// Min-oriented priority queue backed by a sorted sequence, with following
/// considerations:
///
/// 1. The sequence is kept non-decreasing by key after every operation, so
///    the minimum is always at the front
/// 2. `min` and `remove_min` are O(1), `add` pays the O(n) scan and shift
/// 3. Entries with equal keys come back in insertion order
///
/// The cost asymmetry is the point of this structure: it is the mirror image
/// of a binary heap (cheap insert, O(log n) extract-min) and suits workloads
/// that extract far more often than they insert.
///
/// # Example
/// ```rust
/// use sorted_pqueue::SortedPriorityQueue;
///
/// let mut pq = SortedPriorityQueue::new();
/// pq.add(5, "A");
/// pq.add(9, "C");
/// pq.add(3, "B");
/// pq.add(7, "D");
///
/// assert_eq!(pq.min(), Ok((&3, &"B")));
/// assert_eq!(pq.remove_min(), Ok((3, "B")));
/// assert_eq!(pq.min(), Ok((&5, &"A")));
/// ```
#[derive(Debug, Clone)]
pub struct SortedPriorityQueue<K: Key, V> {
    data: VecDeque<Entry<K, V>>,
}

impl<K: Key, V> Default for SortedPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, V> SortedPriorityQueue<K, V> {
    /// Create a new empty SortedPriorityQueue
    ///
    /// # Examples
    /// ```rust
    /// use sorted_pqueue::SortedPriorityQueue;
    ///
    /// let pq = SortedPriorityQueue::<i32, i32>::new();
    ///
    /// assert!(pq.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            data: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for at least `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns entry count in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue contains no entry
    ///
    /// # Examples
    /// ```rust
    /// use sorted_pqueue::SortedPriorityQueue;
    ///
    /// let pq = SortedPriorityQueue::<i32, i32>::new();
    ///
    /// assert!(pq.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a key-value pair to the queue
    ///
    /// The new entry goes immediately before the first entry with a strictly
    /// greater key, or at the back when there is none. Equal keys therefore
    /// dequeue first-in-first-out. Linear scan, O(n).
    ///
    /// # Examples
    /// ```rust
    /// use sorted_pqueue::SortedPriorityQueue;
    ///
    /// let mut pq = SortedPriorityQueue::new();
    /// pq.add(2, "b");
    /// pq.add(1, "a");
    ///
    /// assert_eq!(pq.len(), 2);
    /// assert_eq!(pq.min(), Ok((&1, &"a")));
    /// ```
    pub fn add(&mut self, key: K, value: V) {
        let newest = Entry::new(key, value);

        match self.data.iter().position(|entry| &newest < entry) {
            Some(idx) => self.data.insert(idx, newest),
            None => self.data.push_back(newest),
        }
    }

    /// Return but do not remove the key-value pair with minimum key.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_pqueue::{EmptyQueueError, SortedPriorityQueue};
    ///
    /// let mut pq = SortedPriorityQueue::new();
    /// assert_eq!(pq.min(), Err(EmptyQueueError));
    ///
    /// pq.add(3, "B");
    /// assert_eq!(pq.min(), Ok((&3, &"B")));
    /// // still there
    /// assert_eq!(pq.len(), 1);
    /// ```
    #[inline]
    pub fn min(&self) -> Result<(&K, &V), EmptyQueueError> {
        let entry = self.data.front().ok_or(EmptyQueueError)?;
        Ok((entry.key(), entry.value()))
    }

    /// Remove and return the key-value pair with minimum key.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_pqueue::{EmptyQueueError, SortedPriorityQueue};
    ///
    /// let mut pq = SortedPriorityQueue::new();
    /// pq.add(3, "B");
    ///
    /// assert_eq!(pq.remove_min(), Ok((3, "B")));
    /// assert_eq!(pq.remove_min(), Err(EmptyQueueError));
    /// ```
    #[inline]
    pub fn remove_min(&mut self) -> Result<(K, V), EmptyQueueError> {
        let entry = self.data.pop_front().ok_or(EmptyQueueError)?;
        Ok(entry.into_pair())
    }

    /// Drop all entries, keeping the allocated storage.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns an iterator over the queue, ascending by key.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_pqueue::SortedPriorityQueue;
    ///
    /// let mut pq = SortedPriorityQueue::new();
    /// pq.add(2, "b");
    /// pq.add(1, "a");
    ///
    /// let kvs = pq.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();
    /// assert_eq!(kvs, vec![(1, "a"), (2, "b")]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.data.iter(),
        }
    }
}

impl<K: Key, V> FromIterator<(K, V)> for SortedPriorityQueue<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut pq = Self::new();
        pq.extend(iter);
        pq
    }
}

impl<K: Key, V> Extend<(K, V)> for SortedPriorityQueue<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.add(k, v);
        }
    }
}

impl<'a, K: Key, V> IntoIterator for &'a SortedPriorityQueue<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Key, V> IntoIterator for SortedPriorityQueue<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Consume the queue, yielding pairs ascending by key.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.data.into_iter(),
        }
    }
}

pub use iter::{IntoIter, Iter};

mod iter {
    use std::collections::vec_deque;
    use std::iter::FusedIterator;

    use crate::Entry;

    pub struct Iter<'a, K, V> {
        pub(super) inner: vec_deque::Iter<'a, Entry<K, V>>,
    }

    impl<'a, K, V> Iterator for Iter<'a, K, V> {
        type Item = (&'a K, &'a V);

        #[inline]
        fn size_hint(&self) -> (usize, Option<usize>) {
            self.inner.size_hint()
        }

        #[inline]
        fn next(&mut self) -> Option<Self::Item> {
            self.inner.next().map(|entry| (entry.key(), entry.value()))
        }
    }

    impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
        fn next_back(&mut self) -> Option<Self::Item> {
            self.inner
                .next_back()
                .map(|entry| (entry.key(), entry.value()))
        }
    }

    impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
    impl<K, V> FusedIterator for Iter<'_, K, V> {}

    pub struct IntoIter<K, V> {
        pub(super) inner: vec_deque::IntoIter<Entry<K, V>>,
    }

    impl<K, V> Iterator for IntoIter<K, V> {
        type Item = (K, V);

        #[inline]
        fn size_hint(&self) -> (usize, Option<usize>) {
            self.inner.size_hint()
        }

        #[inline]
        fn next(&mut self) -> Option<Self::Item> {
            self.inner.next().map(Entry::into_pair)
        }
    }

    impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
        fn next_back(&mut self) -> Option<Self::Item> {
            self.inner.next_back().map(Entry::into_pair)
        }
    }

    impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
    impl<K, V> FusedIterator for IntoIter<K, V> {}
}

/// Bound for queue keys, smaller key means higher priority
pub trait Key: Ord {}

impl<T> Key for T where T: Ord {}
