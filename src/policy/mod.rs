//! Cache eviction policies.

pub mod lru;

pub use lru::LruCache;
