//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a memory-efficient LRU cache with O(1) operations
//! for all common cache operations. LRU is one of the most widely used cache
//! eviction algorithms due to its simplicity and good performance for
//! workloads with temporal locality.
//!
//! # Algorithm
//!
//! The cache keeps its entries on a doubly linked list ordered by recency:
//! the head is the least recently used entry and the tail the most recently
//! used. Every `get` or `put` on a resident key detaches the entry and
//! re-appends it at the tail; inserting a new key at capacity evicts the
//! head. A hash index from key to list handle makes every step O(1).
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!
//! - **Space Complexity**: O(n) where n is the capacity of the cache.
//!   Nodes live in a slot arena that is recycled in place, so a warm cache
//!   performs no per-operation allocation.
//!
//! # When to Use
//!
//! LRU caches are ideal for:
//! - General-purpose caching where access patterns exhibit temporal locality
//! - Simple behavior with predictable performance
//!
//! They are less suitable for:
//! - Workloads where frequency of access matters more than recency
//!   (see [`LfuCache`](crate::LfuCache))
//! - Scanning patterns where a large set of items is accessed once
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap the
//! cache in a synchronization primitive such as `Mutex` or `RwLock`; the
//! cache assumes exclusive access for the duration of each operation.

extern crate alloc;

use crate::config::{self, LruCacheConfig};
use crate::list::{Handle, LinkedList};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

struct LruEntry<K, V> {
    key: K,
    value: V,
}

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and removing entries. When the cache reaches
/// capacity, the least recently used entry is evicted to make room for new
/// entries. Entries that have never been touched evict in insertion order.
///
/// # Examples
///
/// ```
/// use linked_cache::LruCache;
///
/// let mut cache = LruCache::new(2);
///
/// // Add items to the cache
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    /// Recency list: head = least recently used, tail = most recently used.
    list: LinkedList<LruEntry<K, V>>,
    map: HashMap<K, Handle, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        let map_capacity = cap.get().next_power_of_two();
        LruCache {
            config: LruCacheConfig { capacity: cap },
            list: LinkedList::with_capacity(cap.get()),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            metrics: LruCacheMetrics::new(),
        }
    }

    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns a reference to the value corresponding to the key and marks
    /// the entry as most recently used.
    ///
    /// The key may be any borrowed form of the cache's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the key type.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(handle) => {
                self.list.move_to_back(handle);
                self.metrics.core.record_hit();
                self.list.get(handle).map(|entry| &entry.value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Returns a reference to the value corresponding to the key without
    /// updating its recency.
    ///
    /// A peek is invisible to the eviction order and is not counted as a
    /// request in the cache metrics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.map.get(key).copied()?;
        self.list.get(handle).map(|entry| &entry.value)
    }

    /// Removes a key from the cache, returning its value if the key was
    /// present. Removing an absent key is a no-op that returns `None`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.map.remove(key)?;
        let entry = self.list.remove(handle)?;
        self.metrics.core.record_removal();
        Some(entry.value)
    }

    /// Clears the cache, removing all key-value pairs.
    ///
    /// Metrics counters are not reset.
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }

    /// Iterates the entries from least to most recently used.
    ///
    /// The traversal is read-only and does not disturb the eviction order;
    /// calling `iter` again restarts from the least recently used entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_cache::LruCache;
    ///
    /// let mut cache = LruCache::new(3);
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.get(&"a");
    ///
    /// let keys: Vec<&str> = cache.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, ["b", "a"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the cache already contained this key, the value is replaced in
    /// place, the entry becomes most recently used, and the old value is
    /// returned. Otherwise the new entry is appended at the most recently
    /// used end, evicting the least recently used entry first when the
    /// cache is at capacity.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&handle) = self.map.get(&key) {
            self.list.move_to_back(handle);
            let entry = self
                .list
                .get_mut(handle)
                .expect("index entry names a live node");
            let old_value = mem::replace(&mut entry.value, value);
            self.metrics.core.record_insertion();
            return Some(old_value);
        }

        if self.map.len() >= self.config.capacity.get() {
            if let Some(victim) = self.list.pop_front() {
                self.map.remove(&victim.key);
                self.metrics.core.record_eviction();
            }
        }

        let handle = self.list.push_back(LruEntry {
            key: key.clone(),
            value,
        });
        self.map.insert(key, handle);
        self.metrics.core.record_insertion();
        None
    }
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a new LRU cache that holds at most `capacity` entries.
    ///
    /// A capacity of `0` is coerced to
    /// [`DEFAULT_CAPACITY`](crate::config::DEFAULT_CAPACITY) and a warning
    /// is logged; construction always succeeds.
    pub fn new(capacity: usize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(
            config::coerce_capacity(capacity),
            DefaultHashBuilder::default(),
        )
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> LruCache<K, V, S> {
    /// Creates a new LRU cache from a configuration.
    ///
    /// Pass `None` to use the default hash builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_cache::LruCache;
    /// use linked_cache::config::LruCacheConfig;
    /// use core::num::NonZeroUsize;
    ///
    /// let config = LruCacheConfig {
    ///     capacity: NonZeroUsize::new(100).unwrap(),
    /// };
    /// let cache: LruCache<String, i32> = LruCache::init(config, None);
    /// assert!(cache.is_empty());
    /// ```
    pub fn init(config: LruCacheConfig, hash_builder: Option<S>) -> Self {
        Self::with_hasher(config.capacity, hash_builder.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

/// Iterator over cache entries from least to most recently used.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: crate::list::Iter<'a, LruEntry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn keys_in_order<K: Clone + Hash + Eq, V, S: BuildHasher>(cache: &LruCache<K, V, S>) -> Vec<K> {
        cache.iter().map(|(k, _)| k.clone()).collect()
    }

    #[test]
    fn test_lru_get_put() {
        let mut cache = LruCache::new(2);
        assert_eq!(cache.put("apple", 1), None);
        assert_eq!(cache.put("banana", 2), None);
        assert_eq!(cache.get(&"apple"), Some(&1));
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), None);
        assert_eq!(cache.put("apple", 3), Some(1));
        assert_eq!(cache.get(&"apple"), Some(&3));
        // "banana" is now the least recently used entry
        assert_eq!(cache.put("cherry", 4), None);
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
    }

    #[test]
    fn test_lru_eviction_order() {
        // Insert 1, 2, 3; touch 1; insert 4 -> evicts 2
        let mut cache = LruCache::new(3);
        cache.put(1, "1");
        cache.put(2, "2");
        cache.put(3, "3");
        assert_eq!(cache.get(&1), Some(&"1"));
        assert_eq!(keys_in_order(&cache), [2, 3, 1]);

        cache.put(4, "4");
        assert_eq!(cache.get(&2), None);
        assert_eq!(keys_in_order(&cache), [3, 1, 4]);
    }

    #[test]
    fn test_lru_untouched_entries_evict_fifo() {
        let mut cache = LruCache::new(3);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        // No entry has been touched: first in, first evicted
        cache.put("d", 4);
        assert_eq!(cache.peek(&"a"), None);
        cache.put("e", 5);
        assert_eq!(cache.peek(&"b"), None);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_lru_update_touches_entry() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);

        // Updating "a" makes it most recently used, so "b" evicts next
        assert_eq!(cache.put("a", 10), Some(1));
        cache.put("c", 3);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&10));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn test_lru_remove() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.remove(&"apple"), Some(1));
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.remove(&"cherry"), None);
        assert_eq!(cache.len(), 1);

        // Removal freed a slot, so no eviction happens here
        assert_eq!(cache.put("cherry", 3), None);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_peek_does_not_promote() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);

        // A peek must not rescue "a" from eviction
        assert_eq!(cache.peek(&"a"), Some(&1));
        cache.put("c", 3);
        assert_eq!(cache.peek(&"a"), None);
        assert_eq!(cache.peek(&"b"), Some(&2));
    }

    #[test]
    fn test_lru_missing_key_is_idempotent() {
        let mut cache: LruCache<&str, u32> = LruCache::new(2);
        cache.put("a", 1);
        assert_eq!(cache.get(&"missing"), None);
        assert_eq!(cache.get(&"missing"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(keys_in_order(&cache), ["a"]);
    }

    #[test]
    fn test_lru_clear() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        cache.put("cherry", 3);
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_capacity_limits() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.put("cherry", 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_zero_capacity_coerced() {
        let cache: LruCache<u32, u32> = LruCache::new(0);
        assert_eq!(cache.cap(), crate::config::DEFAULT_CAPACITY);
    }

    #[test]
    fn test_lru_string_keys() {
        let mut cache = LruCache::new(2);
        let key1 = String::from("apple");
        let key2 = String::from("banana");
        cache.put(key1.clone(), 1);
        cache.put(key2.clone(), 2);
        assert_eq!(cache.get(&key1), Some(&1));
        assert_eq!(cache.get(&key2), Some(&2));
        // Borrowed lookup with &str against String keys
        assert_eq!(cache.get("apple"), Some(&1));
        assert_eq!(cache.get("banana"), Some(&2));
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    struct ComplexValue {
        val: i32,
        description: String,
    }

    #[test]
    fn test_lru_complex_values() {
        let mut cache = LruCache::new(2);
        let fruit1 = ComplexValue {
            val: 1,
            description: String::from("First fruit"),
        };
        let fruit2 = ComplexValue {
            val: 2,
            description: String::from("Second fruit"),
        };
        cache.put(String::from("apple"), fruit1.clone());
        cache.put(String::from("banana"), fruit2.clone());
        assert_eq!(cache.get("apple"), Some(&fruit1));

        // "banana" evicts; "apple" was refreshed by the get above
        cache.put(
            String::from("cherry"),
            ComplexValue {
                val: 3,
                description: String::from("Third fruit"),
            },
        );
        assert_eq!(cache.get("banana"), None);
        assert_eq!(cache.remove("apple"), Some(fruit1));
    }

    #[test]
    fn test_lru_metrics() {
        let mut cache = LruCache::new(2);
        let metrics = CacheMetrics::metrics(&cache);
        assert_eq!(metrics.get("requests"), Some(&0.0));
        assert_eq!(metrics.get("cache_hits"), Some(&0.0));
        assert_eq!(metrics.get("cache_misses"), Some(&0.0));

        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.get(&"apple");
        cache.get(&"banana");
        cache.get(&"missing");
        cache.put("cherry", 3);

        let metrics = CacheMetrics::metrics(&cache);
        assert_eq!(metrics.get("cache_hits"), Some(&2.0));
        assert_eq!(metrics.get("cache_misses"), Some(&1.0));
        assert_eq!(metrics.get("requests"), Some(&3.0));
        assert_eq!(metrics.get("evictions"), Some(&1.0));
        assert_eq!(cache.algorithm_name(), "LRU");
    }

    #[test]
    fn test_lru_iteration_is_restartable() {
        let mut cache = LruCache::new(3);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        let first: Vec<&str> = cache.iter().map(|(k, _)| *k).collect();
        let second: Vec<&str> = cache.iter().map(|(k, _)| *k).collect();
        assert_eq!(first, second);
        assert_eq!(first, ["a", "b", "c"]);
    }
}
