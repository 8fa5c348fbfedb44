//! Side-by-side comparison of the LRU and LFU eviction policies.
//!
//! Run with `cargo run --example cache_comparison`.

extern crate linked_cache;

use linked_cache::metrics::CacheMetrics;
use linked_cache::{LfuCache, LruCache};

fn main() {
    println!("Cache Implementation Comparison");
    println!("===============================");
    println!("Each cache has a capacity of 3 items.");
    println!("We add 4 items to see eviction behavior, then access 'apple'");
    println!("multiple times and add 'elderberry' to see how each algorithm");
    println!("chooses what to evict.\n");

    let mut lru_cache = LruCache::new(3);
    let mut lfu_cache = LfuCache::new(3);

    let data = [("apple", 1), ("banana", 2), ("cherry", 3), ("date", 4)];

    println!("1. LRU Cache (Least Recently Used):");
    for (key, value) in &data {
        lru_cache.put(*key, *value);
        println!("   Added: {key} -> {value}");
    }
    println!("   Resident after inserts:");
    for (key, value) in lru_cache.iter() {
        println!("     {key} -> {value}");
    }

    println!("\n2. LFU Cache (Least Frequently Used):");
    for (key, value) in &data {
        lfu_cache.put(*key, *value);
        println!("   Added: {key} -> {value}");
    }

    // "apple" was evicted from both caches by the fourth insert; re-insert
    // it and make it popular.
    lru_cache.put("apple", 1);
    lfu_cache.put("apple", 1);
    for _ in 0..3 {
        lru_cache.get(&"apple");
        lfu_cache.get(&"apple");
    }
    println!("\n3. Re-inserted 'apple' and accessed it 3 times in each cache.");
    println!(
        "   LFU now tracks 'apple' at frequency {:?}.",
        lfu_cache.frequency(&"apple")
    );

    lru_cache.put("elderberry", 5);
    lfu_cache.put("elderberry", 5);
    println!("\n4. Added 'elderberry' to both caches at capacity:");
    println!(
        "   LRU keeps 'apple' (recently used): {:?}",
        lru_cache.peek(&"apple")
    );
    println!(
        "   LFU keeps 'apple' (frequently used): {:?}",
        lfu_cache.peek(&"apple")
    );

    println!("\n5. Metrics:");
    for (name, metrics) in [
        (lru_cache.algorithm_name(), CacheMetrics::metrics(&lru_cache)),
        (lfu_cache.algorithm_name(), CacheMetrics::metrics(&lfu_cache)),
    ] {
        println!("   {name}:");
        for key in ["requests", "cache_hits", "hit_rate", "evictions"] {
            if let Some(value) = metrics.get(key) {
                println!("     {key}: {value:.2}");
            }
        }
    }
}
