//! Recorder traits for cache operation counters.
//!
//! Split the same way the operations split: core counters every cache
//! operation touches, LRU-specific counters, and a read-only recorder for
//! `&self` paths that rely on interior mutability.

/// Counters shared by the core operation set.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Counters for recency-specific operations.
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
    fn record_resize_call(&mut self);
}

/// Read-only recorder for `&self` methods (uses interior mutability).
///
/// Used by non-promoting lookups such as `peek_lru`, where no mutable
/// recorder is available.
pub trait LruMetricsReadRecorder {
    fn record_peek_lru_call(&self);
    fn record_peek_lru_found(&self);
}

/// Produces an owned snapshot of the current counter values.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
