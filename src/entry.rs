use std::cmp::Ordering;

/// A key-value pair stored in the queue.
///
/// Fields are private, the key and value are only reachable through the
/// read-only accessors (or by consuming the entry with [`into_pair`]).
/// All comparisons delegate to the key, the value never participates.
///
/// [`into_pair`]: Entry::into_pair
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The ordering key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The carried value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the entry, returning its parts.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: PartialEq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for Entry<K, V> {}

impl<K: PartialOrd, V> PartialOrd for Entry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord, V> Ord for Entry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
