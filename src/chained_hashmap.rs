use std::{iter::FusedIterator, mem, slice};

use crate::{hash::bucket_index, stats::ChainStats};

/// Number of buckets of a freshly created or cleared map
pub const INITIAL_CAPACITY: usize = 16;

/// Load factor above which the next `set` doubles the bucket table
pub const LOAD_FACTOR: f64 = 0.75;

/// A key-value pair stored in a chain
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// Entries sharing one bucket, in insertion order
type Chain<V> = Vec<Entry<V>>;

/// A hash map from string keys to values of type `V`, using separate chaining.
///
/// Each bucket holds a chain of entries. A key lives in the chain picked by
/// [`bucket_index`](crate::bucket_index) for the current capacity. When the load factor
/// exceeds [`LOAD_FACTOR`] at the start of a `set`, the table is doubled and every entry
/// is rehashed against the new capacity. Removal never shrinks the table.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<V> {
    /// The bucket table, one chain per bucket
    buckets: Vec<Chain<V>>,
    /// Current number of entries across all chains
    size: usize,
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for ChainedHashMap<V>
where
    K: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashMap<V>
where
    K: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, V> IntoIterator for &'a ChainedHashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Allocates `capacity` empty chains.
///
/// Only ever called with [`INITIAL_CAPACITY`] or a doubled capacity, so a map always has
/// at least 16 buckets and `bucket_index` always names an existing chain.
fn empty_table<V>(capacity: usize) -> Vec<Chain<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

impl<V> ChainedHashMap<V> {
    /// Creates an empty map with [`INITIAL_CAPACITY`] buckets
    #[must_use]
    pub fn new() -> Self {
        Self { buckets: empty_table(INITIAL_CAPACITY), size: 0 }
    }

    /// Chain that `key` belongs to under the current capacity
    fn chain(&self, key: &str) -> Option<&Chain<V>> {
        self.buckets.get(bucket_index(key, self.buckets.len()))
    }

    /// Mutable chain that `key` belongs to under the current capacity
    fn chain_mut(&mut self, key: &str) -> Option<&mut Chain<V>> {
        let index = bucket_index(key, self.buckets.len());
        self.buckets.get_mut(index)
    }

    /// Sets `key` to `value`.
    ///
    /// If the load factor is above [`LOAD_FACTOR`] the table is doubled first, whether or
    /// not `key` is already present. An existing entry is overwritten in place and its old
    /// value returned; otherwise the entry is appended to the end of its chain.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        if self.load_factor() > LOAD_FACTOR {
            self.resize();
        }

        let key = key.into();
        debug_assert!(self.buckets.len() >= INITIAL_CAPACITY);
        // bucket_index(key, len) < len for a non-empty table
        let chain = self.chain_mut(&key)?;

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        chain.push(Entry { key, value });
        self.size = self.size.saturating_add(1);
        None
    }

    /// Returns a reference to the value stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.chain(key)?.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored for `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.chain_mut(key)?
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if the map holds an entry for `key`
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.chain(key).is_some_and(|chain| chain.iter().any(|entry| entry.key == key))
    }

    /// Removes the entry for `key`, returning true if there was one.
    ///
    /// The remaining entries of the chain keep their relative order. The table is never shrunk.
    pub fn remove(&mut self, key: &str) -> bool {
        self.take(key).is_some()
    }

    /// Removes the entry for `key` and returns its value
    pub fn take(&mut self, key: &str) -> Option<V> {
        let chain = self.chain_mut(key)?;
        let position = chain.iter().position(|entry| entry.key == key)?;
        let entry = chain.remove(position);
        self.size = self.size.saturating_sub(1);
        Some(entry.value)
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `len / capacity`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Removes every entry and goes back to [`INITIAL_CAPACITY`] buckets
    pub fn clear(&mut self) {
        log::trace!("clearing {} entries from {} buckets", self.size, self.buckets.len());
        self.buckets = empty_table(INITIAL_CAPACITY);
        self.size = 0;
    }

    /// Doubles the bucket table and rehashes every entry against the new capacity.
    ///
    /// Entries are reinserted in bucket order, then chain order, through `set`.
    fn resize(&mut self) {
        let new_capacity = self.buckets.len().saturating_mul(2);
        log::debug!(
            "resizing bucket table from {} to {} buckets ({} entries)",
            self.buckets.len(),
            new_capacity,
            self.size
        );

        let old_buckets = mem::replace(&mut self.buckets, empty_table(new_capacity));
        self.size = 0;

        for Entry { key, value } in old_buckets.into_iter().flatten() {
            self.set(key, value);
        }
    }

    /// Returns an iterator over the entries, in bucket order then chain order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: self.buckets.iter(), chain: slice::Iter::default() }
    }

    /// Returns all keys, in iteration order
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    /// Returns the length of every chain, in bucket order
    #[must_use]
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    /// Returns occupancy statistics for the bucket table
    #[must_use]
    pub fn chain_stats(&self) -> ChainStats {
        ChainStats::from_chain_lengths(&self.chain_lengths())
    }
}

impl<V: Clone> ChainedHashMap<V> {
    /// Returns clones of all values, in iteration order
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Returns owned key-value pairs, in iteration order
    #[must_use]
    pub fn entries(&self) -> Vec<(String, V)> {
        self.iter().map(|(k, v)| (k.to_owned(), v.clone())).collect()
    }
}

/// Iterator over the entries of a [`ChainedHashMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Buckets not visited yet
    buckets: slice::Iter<'a, Chain<V>>,
    /// Rest of the chain being walked
    chain: slice::Iter<'a, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                return Some((entry.key.as_str(), &entry.value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }
}

impl<V> FusedIterator for Iter<'_, V> {}
