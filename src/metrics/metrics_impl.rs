//! Counter storage for the LRU cache.

use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder};

/// Raw operation counters held inside the cache.
///
/// `peek_lru_*` use [`MetricsCell`] because `peek_lru` takes `&self`.
#[derive(Debug, Default)]
pub struct LruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub peek_lru_calls: MetricsCell,
    pub peek_lru_found: MetricsCell,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub resize_calls: u64,
    pub clear_calls: u64,
}

impl CoreMetricsRecorder for LruMetrics {
    #[inline]
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    #[inline]
    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    #[inline]
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    #[inline]
    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    #[inline]
    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    #[inline]
    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    #[inline]
    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    #[inline]
    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl LruMetricsRecorder for LruMetrics {
    #[inline]
    fn record_pop_lru_call(&mut self) {
        self.pop_lru_calls += 1;
    }

    #[inline]
    fn record_pop_lru_found(&mut self) {
        self.pop_lru_found += 1;
    }

    #[inline]
    fn record_touch_call(&mut self) {
        self.touch_calls += 1;
    }

    #[inline]
    fn record_touch_found(&mut self) {
        self.touch_found += 1;
    }

    #[inline]
    fn record_resize_call(&mut self) {
        self.resize_calls += 1;
    }
}

impl LruMetricsReadRecorder for LruMetrics {
    #[inline]
    fn record_peek_lru_call(&self) {
        self.peek_lru_calls.incr();
    }

    #[inline]
    fn record_peek_lru_found(&self) {
        self.peek_lru_found.incr();
    }
}
