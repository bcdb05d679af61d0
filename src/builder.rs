//! Builder-style construction for [`LruCache`].
//!
//! Collects configuration (capacity, hasher) before the key and value types
//! are known, then materializes the cache with [`build`](CacheBuilder::build).
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new(100).build::<u64, String>();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::policy::lru::LruCache;

/// Builder for creating cache instances.
#[derive(Debug, Clone)]
pub struct CacheBuilder<S = FxBuildHasher> {
    capacity: usize,
    hash_builder: S,
}

impl CacheBuilder {
    /// Creates a builder with the specified capacity and the default Fx hasher.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            hash_builder: FxBuildHasher,
        }
    }
}

impl<S> CacheBuilder<S> {
    /// Swaps in a custom hasher.
    ///
    /// Combined with a newtype key, this is the hook for custom key identity:
    /// the key type's `Hash`/`Eq` decide equality and `S` decides hashing.
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use lrukit::builder::CacheBuilder;
    ///
    /// let cache = CacheBuilder::new(100)
    ///     .hasher(RandomState::new())
    ///     .build::<String, u64>();
    /// assert_eq!(cache.capacity(), 100);
    /// ```
    pub fn hasher<S2>(self, hash_builder: S2) -> CacheBuilder<S2> {
        CacheBuilder {
            capacity: self.capacity,
            hash_builder,
        }
    }

    /// Builds an LRU cache with the collected configuration.
    pub fn build<K, V>(self) -> LruCache<K, V, S>
    where
        K: Eq + Hash + Clone,
        S: BuildHasher,
    {
        LruCache::with_hasher(self.capacity, self.hash_builder)
    }
}
