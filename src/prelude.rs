pub use crate::builder::CacheBuilder;
pub use crate::ds::{RecencyList, SlotArena, SlotId};
pub use crate::error::InvariantError;
pub use crate::policy::lru::LruCache;
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache, ReadOnlyCache};

#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LruMetricsSnapshot;
