//! Least Frequently Used Cache Implementation.
//!
//! The LFU (Least Frequently Used) cache evicts the least frequently
//! accessed items when the cache reaches capacity, based on the O(1) LFU
//! scheme of Shah, Mitra, and Matani: a chain of frequency buckets ordered
//! by strictly increasing frequency, each bucket holding its entries in
//! recency order. Eviction always takes the oldest entry of the lowest
//! bucket, which gives LRU tie-breaking within a frequency.
//!
//! Frequencies only increase; there is no decay or aging. Workloads whose
//! popularity shifts over time will retain stale hot entries, which is the
//! classic LFU trade-off.

extern crate alloc;

use crate::config::{self, LfuCacheConfig};
use crate::list::{Handle, LinkedList};
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
#[cfg(any(test, debug_assertions))]
use alloc::vec::Vec;
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

struct LfuEntry<K, V> {
    key: K,
    value: V,
}

/// One node of the frequency chain: a frequency value plus the entries that
/// currently carry exactly that access count, ordered head = freshest.
struct FrequencyBucket<K, V> {
    frequency: usize,
    entries: LinkedList<LfuEntry<K, V>>,
}

impl<K, V> FrequencyBucket<K, V> {
    fn new(frequency: usize) -> Self {
        FrequencyBucket {
            frequency,
            entries: LinkedList::new(),
        }
    }
}

/// Location of an entry: the handle of its frequency bucket in the chain
/// and the handle of its node in that bucket's entry list.
///
/// Stored in the key index instead of a back-pointer and rewritten on every
/// promotion, eviction, and removal.
#[derive(Clone, Copy)]
struct EntrySlot {
    bucket: Handle,
    node: Handle,
}

/// An implementation of a Least Frequently Used (LFU) cache.
///
/// The cache tracks the access frequency of each entry and evicts from the
/// lowest frequency when capacity is reached. Among entries sharing that
/// frequency, the least recently touched one is evicted first.
///
/// Both `get` and `put` on a resident key count as an access and raise the
/// entry's frequency by one.
///
/// # Examples
///
/// ```
/// use linked_cache::LfuCache;
///
/// // Create an LFU cache with capacity 3
/// let mut cache = LfuCache::new(3);
///
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.put("c", 3);
///
/// // Access "a" and "b" to raise their frequencies
/// assert_eq!(cache.get(&"a"), Some(&1));
/// assert_eq!(cache.get(&"a"), Some(&1));
/// assert_eq!(cache.get(&"b"), Some(&2));
///
/// // "c" has the lowest frequency, so it is evicted
/// cache.put("d", 4);
/// assert_eq!(cache.get(&"c"), None);
/// assert_eq!(cache.get(&"d"), Some(&4));
/// ```
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    config: LfuCacheConfig,
    /// Bucket chain ordered by strictly increasing frequency; the head is
    /// always the lowest frequency present.
    buckets: LinkedList<FrequencyBucket<K, V>>,
    map: HashMap<K, EntrySlot, S>,
    metrics: LfuCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Creates a new LFU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        let map_capacity = cap.get().next_power_of_two();
        LfuCache {
            config: LfuCacheConfig { capacity: cap },
            buckets: LinkedList::new(),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            metrics: LfuCacheMetrics::new(),
        }
    }

    /// Returns the maximum number of key-value pairs the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    /// Returns the current number of key-value pairs in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache contains no key-value pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the cache's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the key type.
    ///
    /// A hit raises the entry's frequency by one and moves it to the
    /// freshest position of its new bucket.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = match self.map.get(key).copied() {
            Some(slot) => slot,
            None => {
                self.metrics.core.record_miss();
                return None;
            }
        };

        self.metrics.core.record_hit();
        let new_slot = self.promote(slot);
        if let Some(stored) = self.map.get_mut(key) {
            *stored = new_slot;
        }
        self.refresh_frequency_levels();

        self.buckets
            .get(new_slot.bucket)
            .and_then(|bucket| bucket.entries.get(new_slot.node))
            .map(|entry| &entry.value)
    }

    /// Returns a reference to the value corresponding to the key without
    /// touching its frequency.
    ///
    /// A peek is invisible to the eviction policy and is not counted as a
    /// request in the cache metrics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.map.get(key)?;
        self.buckets
            .get(slot.bucket)
            .and_then(|bucket| bucket.entries.get(slot.node))
            .map(|entry| &entry.value)
    }

    /// Returns the current access frequency of the key, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_cache::LfuCache;
    ///
    /// let mut cache = LfuCache::new(4);
    /// cache.put("a", 1);
    /// cache.get(&"a");
    ///
    /// assert_eq!(cache.frequency(&"a"), Some(2));
    /// assert_eq!(cache.frequency(&"missing"), None);
    /// ```
    pub fn frequency<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.map.get(key)?;
        self.buckets
            .get(slot.bucket)
            .map(|bucket| bucket.frequency)
    }

    /// Removes a key from the cache, returning its value if the key was
    /// present. Removing an absent key is a no-op that returns `None`.
    ///
    /// If the entry was the last one in its frequency bucket, the bucket is
    /// removed from the chain.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.map.remove(key)?;
        let entry = self
            .buckets
            .get_mut(slot.bucket)
            .and_then(|bucket| bucket.entries.remove(slot.node))?;
        self.drop_bucket_if_empty(slot.bucket);
        self.metrics.core.record_removal();
        self.refresh_frequency_levels();
        Some(entry.value)
    }

    /// Removes and returns the eviction candidate: the least recently
    /// touched entry of the lowest-frequency bucket.
    ///
    /// Returns `None` if the cache is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_cache::LfuCache;
    ///
    /// let mut cache = LfuCache::new(2);
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.get(&"b"); // raise frequency of "b"
    ///
    /// assert_eq!(cache.pop(), Some(("a", 1)));
    /// ```
    pub fn pop(&mut self) -> Option<(K, V)> {
        let bucket_handle = self.buckets.front()?;
        let entry = self
            .buckets
            .get_mut(bucket_handle)
            .and_then(|bucket| bucket.entries.pop_back())?;
        self.map.remove(&entry.key);
        self.drop_bucket_if_empty(bucket_handle);
        self.metrics.core.record_eviction();
        self.refresh_frequency_levels();
        Some((entry.key, entry.value))
    }

    /// Clears the cache, removing all key-value pairs.
    ///
    /// Metrics counters are not reset.
    pub fn clear(&mut self) {
        self.map.clear();
        self.buckets.clear();
        self.refresh_frequency_levels();
    }

    /// Moves the entry at `slot` into the bucket for the next frequency and
    /// returns its new location. The caller must store the returned slot in
    /// the key index.
    ///
    /// Creates the target bucket immediately after the current one when the
    /// chain does not already continue with frequency `f + 1`, and drops
    /// the current bucket if the move left it empty.
    fn promote(&mut self, slot: EntrySlot) -> EntrySlot {
        let frequency = self
            .buckets
            .get(slot.bucket)
            .expect("entry slot names a live bucket")
            .frequency;
        let target_frequency = frequency + 1;

        let target = match self.buckets.next(slot.bucket) {
            Some(next)
                if self.buckets.get(next).map(|bucket| bucket.frequency)
                    == Some(target_frequency) =>
            {
                next
            }
            _ => self
                .buckets
                .insert_after(slot.bucket, FrequencyBucket::new(target_frequency))
                .expect("promotion anchor is a live bucket"),
        };

        let entry = self
            .buckets
            .get_mut(slot.bucket)
            .and_then(|bucket| bucket.entries.remove(slot.node))
            .expect("entry slot names a live node");
        let node = self
            .buckets
            .get_mut(target)
            .expect("target bucket was just resolved")
            .entries
            .push_front(entry);

        self.drop_bucket_if_empty(slot.bucket);
        self.metrics
            .record_frequency_increment(frequency, target_frequency);

        EntrySlot {
            bucket: target,
            node,
        }
    }

    /// Evicts the least recently touched entry of the lowest bucket.
    fn evict(&mut self) {
        let bucket_handle = match self.buckets.front() {
            Some(handle) => handle,
            None => return,
        };
        let victim = self
            .buckets
            .get_mut(bucket_handle)
            .and_then(|bucket| bucket.entries.pop_back());
        if let Some(entry) = victim {
            self.map.remove(&entry.key);
            self.metrics.core.record_eviction();
        }
        self.drop_bucket_if_empty(bucket_handle);
    }

    fn drop_bucket_if_empty(&mut self, handle: Handle) {
        if self
            .buckets
            .get(handle)
            .map_or(false, |bucket| bucket.entries.is_empty())
        {
            self.buckets.remove(handle);
        }
    }

    fn refresh_frequency_levels(&mut self) {
        let min = self
            .buckets
            .front()
            .and_then(|handle| self.buckets.get(handle))
            .map_or(0, |bucket| bucket.frequency);
        let max = self
            .buckets
            .back()
            .and_then(|handle| self.buckets.get(handle))
            .map_or(0, |bucket| bucket.frequency);
        self.metrics
            .update_frequency_levels(min, max, self.buckets.len());
    }

    /// Returns the bucket chain as `(frequency, entries)` pairs, buckets in
    /// ascending frequency order and entries from freshest to oldest.
    ///
    /// Available in test and debug builds for structural assertions.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_snapshot(&self) -> Vec<(usize, Vec<(K, V)>)>
    where
        K: Clone,
        V: Clone,
    {
        self.buckets
            .iter()
            .map(|bucket| {
                (
                    bucket.frequency,
                    bucket
                        .entries
                        .iter()
                        .map(|entry| (entry.key.clone(), entry.value.clone()))
                        .collect(),
                )
            })
            .collect()
    }

    /// Asserts every structural invariant of the cache.
    ///
    /// Available in test and debug builds.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let mut total_entries = 0;
        let mut chain_length = 0;
        let mut previous_frequency = 0;
        let mut current = self.buckets.front();

        while let Some(handle) = current {
            let bucket = self.buckets.get(handle).expect("chain handle is live");
            assert!(
                bucket.frequency > previous_frequency,
                "bucket frequencies must strictly increase along the chain"
            );
            assert!(
                !bucket.entries.is_empty(),
                "an empty bucket must be removed immediately"
            );
            previous_frequency = bucket.frequency;
            total_entries += bucket.entries.len();
            chain_length += 1;
            current = self.buckets.next(handle);
        }

        assert_eq!(chain_length, self.buckets.len());
        assert_eq!(
            total_entries,
            self.map.len(),
            "index size must equal the sum of bucket lengths"
        );
        assert!(self.map.len() <= self.config.capacity.get());

        for (key, slot) in &self.map {
            let bucket = self
                .buckets
                .get(slot.bucket)
                .expect("index slot names a live bucket");
            let entry = bucket
                .entries
                .get(slot.node)
                .expect("index slot names a live entry");
            assert!(
                entry.key == *key,
                "index key and entry key must agree"
            );
        }
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the cache already contained this key, the value is replaced, the
    /// entry's frequency is raised exactly as for [`get`](Self::get), and
    /// the old value is returned.
    ///
    /// Otherwise the entry is inserted with frequency 1 at the freshest
    /// position of the frequency-1 bucket (creating that bucket at the head
    /// of the chain if needed). If the cache is at capacity, the least
    /// recently touched entry of the lowest-frequency bucket is evicted
    /// first.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.map.get(&key).copied() {
            let old_value = {
                let entry = self
                    .buckets
                    .get_mut(slot.bucket)
                    .and_then(|bucket| bucket.entries.get_mut(slot.node))
                    .expect("index entry names a live node");
                mem::replace(&mut entry.value, value)
            };
            let new_slot = self.promote(slot);
            if let Some(stored) = self.map.get_mut(&key) {
                *stored = new_slot;
            }
            self.metrics.core.record_insertion();
            self.refresh_frequency_levels();
            return Some(old_value);
        }

        if self.map.len() >= self.config.capacity.get() {
            self.evict();
        }

        let bucket = match self.buckets.front() {
            Some(front) if self.buckets.get(front).map(|bucket| bucket.frequency) == Some(1) => {
                front
            }
            _ => self.buckets.push_front(FrequencyBucket::new(1)),
        };
        let node = self
            .buckets
            .get_mut(bucket)
            .expect("insertion bucket was just resolved")
            .entries
            .push_front(LfuEntry {
                key: key.clone(),
                value,
            });
        self.map.insert(key, EntrySlot { bucket, node });
        self.metrics.core.record_insertion();
        self.refresh_frequency_levels();
        None
    }
}

impl<K: Hash + Eq, V> LfuCache<K, V> {
    /// Creates a new LFU cache that holds at most `capacity` entries.
    ///
    /// A capacity of `0` is coerced to
    /// [`DEFAULT_CAPACITY`](crate::config::DEFAULT_CAPACITY) and a warning
    /// is logged; construction always succeeds.
    pub fn new(capacity: usize) -> LfuCache<K, V, DefaultHashBuilder> {
        LfuCache::with_hasher(
            config::coerce_capacity(capacity),
            DefaultHashBuilder::default(),
        )
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> LfuCache<K, V, S> {
    /// Creates a new LFU cache from a configuration.
    ///
    /// Pass `None` to use the default hash builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_cache::LfuCache;
    /// use linked_cache::config::LfuCacheConfig;
    /// use core::num::NonZeroUsize;
    ///
    /// let config = LfuCacheConfig {
    ///     capacity: NonZeroUsize::new(100).unwrap(),
    /// };
    /// let cache: LfuCache<String, i32> = LfuCache::init(config, None);
    /// assert!(cache.is_empty());
    /// ```
    pub fn init(config: LfuCacheConfig, hash_builder: Option<S>) -> Self {
        Self::with_hasher(config.capacity, hash_builder.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LfuCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .field("frequency_levels", &self.buckets.len())
            .finish()
    }
}
