//! Query result snapshots and the cursor that walks them.
//!
//! A snapshot is produced eagerly by a subtree query and owns clones of every
//! collected key and value. Changing the container afterwards never touches a
//! snapshot that already exists, and never shows up in it either.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::iter::{FusedIterator, Zip};
use core::slice;

// =============================================================================
// Snapshot
// =============================================================================

/// Owned result of a subtree query: suffix key tuples and values, in
/// lexicographic key order, as two parallel sequences.
///
/// Cloning is cheap: clones and cursors share the same storage.
pub struct Snapshot<K, V> {
    keys: Arc<[K]>,
    values: Arc<[V]>,
}

impl<K, V> Snapshot<K, V> {
    pub(crate) fn from_parts(keys: Vec<K>, values: Vec<V>) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        Snapshot { keys: keys.into(), values: values.into() }
    }

    /// Number of collected entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Suffix key tuples, parallel to [`values`](Self::values).
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Entry `index` as a `(keys, value)` pair.
    pub fn get(&self, index: usize) -> Option<(&K, &V)> {
        Some((self.keys.get(index)?, self.values.get(index)?))
    }

    /// `(keys, value)` pairs in order.
    pub fn iter(&self) -> Zip<slice::Iter<'_, K>, slice::Iter<'_, V>> {
        self.keys.iter().zip(self.values.iter())
    }

    /// Cursor at the first value.
    pub fn begin(&self) -> Cursor<V> {
        Cursor { values: Arc::clone(&self.values), pos: 0 }
    }

    /// Cursor one past the last value.
    pub fn end(&self) -> Cursor<V> {
        Cursor { values: Arc::clone(&self.values), pos: self.values.len() }
    }
}

impl<K, V> Default for Snapshot<K, V> {
    fn default() -> Self {
        Snapshot { keys: Arc::from(Vec::new()), values: Arc::from(Vec::new()) }
    }
}

impl<K, V> Clone for Snapshot<K, V> {
    fn clone(&self) -> Self {
        Snapshot { keys: Arc::clone(&self.keys), values: Arc::clone(&self.values) }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Snapshot<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Snapshot<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<K: Eq, V: Eq> Eq for Snapshot<K, V> {}

impl<'a, K, V> IntoIterator for &'a Snapshot<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// Forward cursor over the values of a snapshot.
///
/// Iterating yields clones of the values. Two cursors compare equal when both
/// are exhausted, or when they share storage and sit at the same position;
/// this is what lets `map.find(..) == map.end(..)` express "not found".
pub struct Cursor<V> {
    values: Arc<[V]>,
    pos: usize,
}

impl<V> Cursor<V> {
    /// An exhausted cursor over nothing.
    pub fn empty() -> Self {
        Cursor { values: Arc::from(Vec::new()), pos: 0 }
    }

    /// Value under the cursor, `None` once exhausted.
    pub fn current(&self) -> Option<&V> {
        self.values.get(self.pos)
    }

    /// Step forward; a no-op on an exhausted cursor.
    pub fn advance(&mut self) {
        if self.pos < self.values.len() {
            self.pos += 1;
        }
    }

    pub fn is_end(&self) -> bool {
        self.pos >= self.values.len()
    }

    /// Index of the value under the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Values not yet visited.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.pos
    }
}

impl<V> Clone for Cursor<V> {
    fn clone(&self) -> Self {
        Cursor { values: Arc::clone(&self.values), pos: self.pos }
    }
}

impl<V: fmt::Debug> fmt::Debug for Cursor<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos)
            .field("current", &self.current())
            .finish()
    }
}

impl<V> PartialEq for Cursor<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => Arc::ptr_eq(&self.values, &other.values) && self.pos == other.pos,
            _ => false,
        }
    }
}

impl<V> Eq for Cursor<V> {}

impl<V: Clone> Iterator for Cursor<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let value = self.current()?.clone();
        self.pos += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<V: Clone> ExactSizeIterator for Cursor<V> {}

impl<V: Clone> FusedIterator for Cursor<V> {}
