//! In-memory TTL cache for analytics responses, keyed by date range.
//!
//! One cache instance is owned by one `use_analytics` hook instance; it is
//! never shared across components and dies with its owner.

use contracts::dashboards::analytics::{AnalyticsData, DateRange};
use std::collections::HashMap;

/// Default entry lifetime: 5 minutes.
pub const DEFAULT_CACHE_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Cache partition key for an optional date range.
pub fn cache_key(range: Option<&DateRange>) -> String {
    match range {
        None => "analytics:all".to_string(),
        Some(r) => format!("analytics:{}:{}", r.start, r.end),
    }
}

struct CacheEntry {
    data: AnalyticsData,
    timestamp_ms: f64,
}

pub struct AnalyticsCache {
    ttl_ms: f64,
    entries: HashMap<String, CacheEntry>,
}

impl AnalyticsCache {
    pub fn new(ttl_ms: f64) -> Self {
        Self {
            ttl_ms,
            entries: HashMap::new(),
        }
    }

    /// Fresh hit returns a copy of the data. An expired entry is evicted
    /// immediately and reported as a miss.
    pub fn lookup(&mut self, key: &str, now_ms: f64) -> Option<AnalyticsData> {
        let entry = self.entries.get(key)?;
        if now_ms - entry.timestamp_ms > self.ttl_ms {
            self.entries.remove(key);
            return None;
        }
        Some(entry.data.clone())
    }

    pub fn store(&mut self, key: String, data: AnalyticsData, now_ms: f64) {
        self.entries.insert(
            key,
            CacheEntry {
                data,
                timestamp_ms: now_ms,
            },
        );
    }

    /// Drop the entry for `key`, forcing the next lookup to miss.
    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::analytics::AnalyticsSummary;

    fn sample_data(marker: f64) -> AnalyticsData {
        AnalyticsData {
            revenue_by_month: Vec::new(),
            pipeline_history: Vec::new(),
            status_distribution: HashMap::new(),
            activity_by_week: Vec::new(),
            summary: AnalyticsSummary {
                total_revenue: marker,
                avg_deal_size: 0.0,
                win_rate: 0.0,
                total_customers: 0,
                new_customers_this_period: 0,
            },
            last_updated: "2024-02-01T00:00:00Z".to_string(),
        }
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn key_for_missing_range_is_all() {
        assert_eq!(cache_key(None), "analytics:all");
    }

    #[test]
    fn key_includes_both_bounds() {
        let r = range("2024-01-01", "2024-01-31");
        assert_eq!(cache_key(Some(&r)), "analytics:2024-01-01:2024-01-31");
    }

    #[test]
    fn fresh_entry_hits_within_ttl() {
        let mut cache = AnalyticsCache::new(1000.0);
        cache.store("k".into(), sample_data(1.0), 100.0);

        let hit = cache.lookup("k", 600.0).expect("fresh entry should hit");
        assert_eq!(hit.summary.total_revenue, 1.0);

        // Boundary: age exactly equal to TTL is still fresh.
        assert!(cache.lookup("k", 1100.0).is_some());
    }

    #[test]
    fn expired_entry_is_evicted_on_lookup() {
        let mut cache = AnalyticsCache::new(1000.0);
        cache.store("k".into(), sample_data(1.0), 100.0);

        assert!(cache.lookup("k", 1101.0).is_none());
        assert!(cache.is_empty(), "stale entry must be evicted immediately");
    }

    #[test]
    fn invalidate_forces_next_lookup_to_miss() {
        let mut cache = AnalyticsCache::new(1000.0);
        cache.store("k".into(), sample_data(1.0), 100.0);
        cache.invalidate("k");

        assert!(cache.lookup("k", 200.0).is_none());
    }

    #[test]
    fn store_replaces_previous_entry() {
        let mut cache = AnalyticsCache::new(1000.0);
        cache.store("k".into(), sample_data(1.0), 100.0);
        cache.store("k".into(), sample_data(2.0), 200.0);

        assert_eq!(cache.len(), 1);
        let hit = cache.lookup("k", 300.0).unwrap();
        assert_eq!(hit.summary.total_revenue, 2.0);
    }

    #[test]
    fn ranges_partition_the_cache() {
        let mut cache = AnalyticsCache::new(1000.0);
        let january = cache_key(Some(&range("2024-01-01", "2024-01-31")));
        let february = cache_key(Some(&range("2024-02-01", "2024-02-29")));
        cache.store(january.clone(), sample_data(1.0), 0.0);
        cache.store(february.clone(), sample_data(2.0), 0.0);

        assert_eq!(cache.lookup(&january, 10.0).unwrap().summary.total_revenue, 1.0);
        assert_eq!(cache.lookup(&february, 10.0).unwrap().summary.total_revenue, 2.0);
    }
}
