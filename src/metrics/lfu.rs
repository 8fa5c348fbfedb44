//! LFU Cache Metrics
//!
//! Metrics specific to the LFU (Least Frequently Used) cache algorithm.
//! LFU tracks an access frequency per entry, so these metrics focus on the
//! frequency distribution alongside the core operation counters.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LFU-specific metrics (extends [`CoreCacheMetrics`]).
#[derive(Debug, Default, Clone)]
pub struct LfuCacheMetrics {
    /// Core metrics common to both cache algorithms
    pub core: CoreCacheMetrics,

    /// Lowest frequency currently present in the cache (0 when empty)
    pub min_frequency: u64,

    /// Highest frequency currently present in the cache (0 when empty)
    pub max_frequency: u64,

    /// Total number of frequency increments (every hit on a resident key)
    pub total_frequency_increments: u64,

    /// Number of distinct frequency buckets currently in use
    pub active_frequency_levels: u64,
}

impl LfuCacheMetrics {
    /// Creates a zeroed metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a promotion from `old_frequency` to `new_frequency`.
    pub fn record_frequency_increment(&mut self, _old_frequency: usize, new_frequency: usize) {
        self.total_frequency_increments += 1;
        if self.max_frequency < new_frequency as u64 {
            self.max_frequency = new_frequency as u64;
        }
    }

    /// Refreshes the frequency-distribution gauges from the bucket chain.
    pub fn update_frequency_levels(&mut self, min: usize, max: usize, levels: usize) {
        self.min_frequency = min as u64;
        self.max_frequency = max as u64;
        self.active_frequency_levels = levels as u64;
    }

    /// Returns the spread between the highest and lowest active frequency.
    pub fn frequency_range(&self) -> u64 {
        self.max_frequency.saturating_sub(self.min_frequency)
    }

    /// Returns the average number of frequency increments per hit.
    ///
    /// Returns 0.0 if no hits have occurred.
    pub fn average_frequency(&self) -> f64 {
        if self.core.hits > 0 {
            self.total_frequency_increments as f64 / self.core.hits as f64
        } else {
            0.0
        }
    }

    /// Converts LFU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert("min_frequency".to_string(), self.min_frequency as f64);
        metrics.insert("max_frequency".to_string(), self.max_frequency as f64);
        metrics.insert("frequency_range".to_string(), self.frequency_range() as f64);
        metrics.insert(
            "total_frequency_increments".to_string(),
            self.total_frequency_increments as f64,
        );
        metrics.insert(
            "active_frequency_levels".to_string(),
            self.active_frequency_levels as f64,
        );
        metrics.insert("average_frequency".to_string(), self.average_frequency());

        metrics
    }
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_increment_tracking() {
        let mut metrics = LfuCacheMetrics::new();
        metrics.record_frequency_increment(1, 2);
        metrics.record_frequency_increment(2, 3);

        assert_eq!(metrics.total_frequency_increments, 2);
        assert_eq!(metrics.max_frequency, 3);
    }

    #[test]
    fn test_update_frequency_levels() {
        let mut metrics = LfuCacheMetrics::new();
        metrics.update_frequency_levels(1, 4, 3);

        assert_eq!(metrics.min_frequency, 1);
        assert_eq!(metrics.max_frequency, 4);
        assert_eq!(metrics.active_frequency_levels, 3);
        assert_eq!(metrics.frequency_range(), 3);
    }

    #[test]
    fn test_reporting_includes_lfu_keys() {
        let metrics = LfuCacheMetrics::new();
        let report = metrics.to_btreemap();
        assert!(report.contains_key("min_frequency"));
        assert!(report.contains_key("max_frequency"));
        assert!(report.contains_key("active_frequency_levels"));
        assert_eq!(metrics.algorithm_name(), "LFU");
    }
}
