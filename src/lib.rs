#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Algorithm | Description | Best Use Case |
//! |-----------|-------------|---------------|
//! | [`LruCache`] | Least Recently Used | General purpose, recency-based access |
//! | [`LfuCache`] | Least Frequently Used | Stable popularity patterns |
//!
//! ## Performance Characteristics
//!
//! | Algorithm | Get | Put | Remove | Scan Resist | Adapts |
//! |-----------|-----|-----|--------|-------------|--------|
//! | LRU       | O(1)| O(1)| O(1)   | Poor        | N/A    |
//! | LFU       | O(1)| O(1)| O(1)   | Excellent   | No     |
//!
//! ## Code Examples
//!
//! ### LRU (Least Recently Used)
//!
//! Evicts the item that hasn't been accessed for the longest time. Simple
//! and effective for workloads with temporal locality.
//!
//! ```rust
//! use linked_cache::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ### LFU (Least Frequently Used)
//!
//! Tracks access frequency and evicts the least frequently accessed item,
//! breaking ties by recency within a frequency. Great for workloads with
//! stable popularity patterns.
//!
//! ```rust
//! use linked_cache::LfuCache;
//!
//! let mut cache = LfuCache::new(2);
//! cache.put("rare", 1);
//! cache.put("popular", 2);
//!
//! // Access "popular" multiple times
//! for _ in 0..10 { cache.get(&"popular"); }
//!
//! cache.put("new", 3);  // "rare" evicted (lowest frequency)
//! assert!(cache.get(&"popular").is_some());
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`lfu`]: Least Frequently Used cache implementation
//! - [`config`]: Configuration structures for both cache types
//! - [`metrics`]: Metrics collection for cache performance monitoring

#![no_std]

extern crate alloc;

#[cfg(any(test, not(feature = "hashbrown")))]
extern crate std;

/// Arena-backed doubly linked list with stable handles.
///
/// This module is internal infrastructure shared by both caches and is not
/// exposed to library consumers. Nodes live in a slot arena addressed by
/// plain indices, so there are no raw pointers and no ownership cycles.
pub(crate) mod list;

/// Cache configuration structures.
///
/// Provides configuration structures for both cache implementations and
/// the [`DEFAULT_CAPACITY`](config::DEFAULT_CAPACITY) fallback.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used entry
/// when the capacity is reached.
pub mod lru;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used entry
/// when capacity is reached, tracked through a chain of frequency buckets.
pub mod lfu;

/// Cache metrics system.
///
/// Provides a metrics collection and reporting system for both caches.
/// Each cache tracks algorithm-specific metrics while implementing a common
/// interface.
pub mod metrics;

// Re-export cache types
pub use lfu::LfuCache;
pub use lru::LruCache;
