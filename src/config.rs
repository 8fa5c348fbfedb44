//! Cache Configuration Module
//!
//! This module provides configuration structures for both cache
//! implementations. Each cache type has its own dedicated configuration
//! struct with public fields.
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: Capacity is a [`NonZeroUsize`], so a zero capacity is
//!   unrepresentable once a config exists
//! - **No boilerplate**: No constructors or builder methods needed
//!
//! Callers that hold a plain `usize` (possibly zero) should go through
//! `LruCache::new` / `LfuCache::new` instead, which coerce a zero capacity
//! to [`DEFAULT_CAPACITY`] and log a warning rather than failing.
//!
//! # Configs
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | `LfuCacheConfig` | [`LfuCache`](crate::LfuCache) | Least Frequently Used |
//!
//! # Examples
//!
//! ```
//! use linked_cache::config::LruCacheConfig;
//! use linked_cache::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(10_000).unwrap(),
//! };
//!
//! // Create cache from config
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
//! assert_eq!(cache.cap().get(), 10_000);
//! ```

use core::num::NonZeroUsize;

pub mod lfu;
pub mod lru;

// Re-exports for convenience
pub use lfu::LfuCacheConfig;
pub use lru::LruCacheConfig;

/// Capacity used when a cache is constructed with a zero capacity.
///
/// `LruCache::new` and `LfuCache::new` never fail: a capacity of `0` is
/// replaced with this value and a warning is logged through the `log`
/// facade. Capacity is fixed for the lifetime of a cache.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(capacity) => capacity,
    None => panic!("default capacity must be non-zero"),
};

/// Resolves a caller-supplied capacity, falling back to [`DEFAULT_CAPACITY`].
pub(crate) fn coerce_capacity(capacity: usize) -> NonZeroUsize {
    match NonZeroUsize::new(capacity) {
        Some(capacity) => capacity,
        None => {
            log::warn!(
                "cache capacity must be at least 1, using default of {}",
                DEFAULT_CAPACITY
            );
            DEFAULT_CAPACITY
        }
    }
}
