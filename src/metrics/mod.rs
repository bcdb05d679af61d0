//! Operation counters for the cache, enabled by the `metrics` feature.
//!
//! Counters are plain `u64` fields updated on `&mut self` paths and
//! [`MetricsCell`]s on `&self` paths (non-promoting peeks). Reading them is
//! done through an owned [`LruMetricsSnapshot`].

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use cell::MetricsCell;
pub use metrics_impl::LruMetrics;
pub use snapshot::LruMetricsSnapshot;
pub use traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
