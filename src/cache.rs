//! Memoization of aggregation results
//!
//! Results are keyed by what was computed ([`AggregationKey`]) and by the
//! fingerprint of the dataset it was computed from. The cache is an ordinary
//! value owned by the caller; nothing is stored globally. Entries go away when
//! the owner invalidates them or, once the cache is full, least recently used
//! first.

use std::any::Any;
use std::collections::VecDeque;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::filter::FilterSelection;
use crate::models::{Field, SortOrder};

/// Identity of a memoized computation, including its parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AggregationKey {
    /// Filtering with a selection
    Filter(FilterSelection),
    /// Headline indicators
    Kpis,
    /// Top groups by mean salary
    TopByMean {
        /// Grouping field
        field: Field,
        /// Number of groups kept
        n: usize,
        /// Ranking direction
        order: SortOrder,
    },
    /// Top groups by record count
    TopByCount {
        /// Grouping field
        field: Field,
        /// Number of groups kept
        n: usize,
    },
    /// Mean salary per value of a field
    GroupMean(Field),
    /// Per-year mean, median and count
    YearlyTrend,
    /// Mean salary pivot
    Pivot {
        /// Row field
        rows: Field,
        /// Column field
        cols: Field,
    },
    /// Histogram plus box-plot summary
    Distribution {
        /// Number of histogram bins
        bins: usize,
    },
    /// Enriched per-country means
    Countries,
    /// Country x seniority heatmap over the most represented countries
    Heatmap {
        /// Number of countries kept
        countries: usize,
    },
}

/// Full cache key: computation plus input fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// What was computed
    pub aggregation: AggregationKey,
    /// Fingerprint of the input dataset
    pub fingerprint: u64,
}

/// Entries kept by [`AggregationCache::new`]
pub const DEFAULT_CAPACITY: usize = 256;

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that had to compute
    pub misses: u64,
    /// Entries dropped to stay within capacity
    pub evictions: u64,
}

/// Caller-owned memoization table holding at most `capacity` results
#[derive(Debug)]
pub struct AggregationCache {
    entries: FxHashMap<CacheKey, Arc<dyn Any + Send + Sync>>,
    /// Keys from least to most recently used
    order: VecDeque<CacheKey>,
    capacity: usize,
    stats: CacheStats,
    disabled: bool,
}

impl Default for AggregationCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl AggregationCache {
    /// Create an empty, enabled cache with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty, enabled cache holding at most `capacity` results
    ///
    /// A capacity of zero behaves like [`AggregationCache::disabled`].
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            order: VecDeque::new(),
            capacity,
            stats: CacheStats::default(),
            disabled: capacity == 0,
        }
    }

    /// Create a cache that never stores anything
    #[must_use]
    pub fn disabled() -> Self {
        Self::with_capacity(0)
    }

    /// Maximum number of stored results
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether results are being stored
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Return the cached value for `key`, computing and storing it on a miss
    pub fn get_or_compute<T, F>(&mut self, key: CacheKey, compute: F) -> T
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        if let Some(value) = self
            .entries
            .get(&key)
            .and_then(|entry| entry.downcast_ref::<T>())
            .cloned()
        {
            self.stats.hits += 1;
            self.touch(&key);
            return value;
        }

        self.stats.misses += 1;
        let value = compute();
        if !self.disabled {
            log::debug!("Caching {:?} for dataset {:016x}", key.aggregation, key.fingerprint);
            self.insert(key, Arc::new(value.clone()));
        }
        value
    }

    fn insert(&mut self, key: CacheKey, value: Arc<dyn Any + Send + Sync>) {
        if self.entries.contains_key(&key) {
            self.touch(&key);
        } else {
            while self.entries.len() >= self.capacity {
                let Some(oldest) = self.order.pop_front() else {
                    break;
                };
                self.entries.remove(&oldest);
                self.stats.evictions += 1;
                log::debug!(
                    "Evicted {:?} for dataset {:016x}",
                    oldest.aggregation,
                    oldest.fingerprint
                );
            }
            self.order.push_back(key.clone());
        }
        self.entries.insert(key, value);
    }

    /// Mark `key` as the most recently used entry
    fn touch(&mut self, key: &CacheKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }

    /// Whether a result is stored for `key`
    #[must_use]
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop every stored result
    pub fn invalidate(&mut self) {
        if !self.entries.is_empty() {
            log::info!("Invalidating {} cached aggregation results", self.entries.len());
        }
        self.entries.clear();
        self.order.clear();
    }

    /// Drop the results computed from one dataset
    pub fn invalidate_fingerprint(&mut self, fingerprint: u64) {
        self.entries.retain(|key, _| key.fingerprint != fingerprint);
        self.order.retain(|key| key.fingerprint != fingerprint);
    }

    /// Number of stored results
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit/miss counters since creation
    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }
}
