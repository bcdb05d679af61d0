//! lrukit: a fixed-capacity least-recently-used cache with O(1) operations
//! and stable entry handles.
//!
//! The cache fuses two structures behind one facade: a hash index for O(1)
//! key lookup and an arena-backed recency list for O(1) promotion and
//! eviction. See [`policy::lru::LruCache`] for the public API.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
