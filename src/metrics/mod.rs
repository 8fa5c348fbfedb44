//! Cache Metrics System
//!
//! Provides a metrics system for the cache implementations using
//! BTreeMap-based reporting. Each cache tracks its own specific metrics
//! while implementing a common [`CacheMetrics`] trait.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap is used instead of HashMap for several reasons:
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Essential for testing and benchmark comparisons
//! - **Better debugging**: Consistent output makes logs more readable
//!
//! The performance difference (O(log n) vs O(1)) is negligible with a dozen
//! metric keys, but the deterministic behavior matters for comparisons.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lfu;
pub mod lru;

pub use lfu::LfuCacheMetrics;
pub use lru::LruCacheMetrics;

/// Operation counters common to both cache algorithms.
///
/// All counters are plain `u64` values owned by the single-threaded cache;
/// recording a metric is a field increment, never an allocation.
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get`) made against the cache
    pub requests: u64,

    /// Number of lookups that found the key
    pub hits: u64,

    /// Number of entries written into the cache (new keys and value updates)
    pub insertions: u64,

    /// Number of entries evicted by capacity pressure
    pub evictions: u64,

    /// Number of entries removed explicitly via `remove`
    pub removals: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cache hit.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.hits += 1;
    }

    /// Records a cache miss.
    ///
    /// Misses can also be derived as `requests - hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a write into the cache (new entry or value update).
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an eviction caused by capacity pressure.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an explicit removal.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Returns the hit rate as a value between 0.0 and 1.0.
    ///
    /// Returns 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Returns the miss rate as a value between 0.0 and 1.0.
    ///
    /// Returns 0.0 if no requests have been made.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the core counters to a BTreeMap for reporting.
    ///
    /// Uses BTreeMap to ensure deterministic, consistent ordering, which is
    /// what makes test assertions and cross-algorithm comparisons stable.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("cache_hits".to_string(), self.hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.hits) as f64,
        );
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Trait implemented by every cache for metrics reporting.
///
/// Provides a uniform interface for retrieving metrics from any cache
/// implementation, with BTreeMap guaranteeing deterministic key order.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LRU", "LFU").
    fn algorithm_name(&self) -> &'static str;
}
