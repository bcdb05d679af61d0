//! Cache trait hierarchy.
//!
//! The operation set splits along mutability and policy lines:
//!
//! ```text
//!   ReadOnlyCache<K, V>      len / is_empty / capacity / peek / peek_lru
//!          │
//!          ▼
//!   CoreCache<K, V>          insert / insert_or_assign / get / contains / clear
//!          │
//!          ▼
//!   MutableCache<K, V>       remove
//!          │
//!          ▼
//!   LruCacheTrait<K, V>      pop_lru / touch / resize
//! ```
//!
//! `CoreCache::get` and `CoreCache::contains` take `&mut self`: a hit is an
//! access and promotes the entry to most-recently-used. `ReadOnlyCache::peek`
//! is the non-promoting alternative.
//!
//! Traits place no bounds on `K` and `V`; implementations add the ones they
//! need (the LRU cache requires `K: Eq + Hash + Clone`).

/// Non-promoting read operations.
///
/// Nothing here counts as an access, so calling these never changes which
/// entry is evicted next.
pub trait ReadOnlyCache<K, V> {
    /// Returns the number of entries currently held.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the capacity bound.
    fn capacity(&self) -> usize;

    /// Looks up a value without promoting it.
    fn peek(&self, key: &K) -> Option<&V>;

    /// Returns the least recently used entry without removing or promoting it.
    fn peek_lru(&self) -> Option<(&K, &V)>;
}

/// The universal cache operation set.
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts only if `key` is absent.
    ///
    /// Returns `false` with zero side effects (no value change, no
    /// promotion) when the key is already present.
    fn insert(&mut self, key: K, value: V) -> bool;

    /// Inserts, or overwrites and promotes when `key` is present.
    ///
    /// Returns `true` if the entry is new, `false` if an existing value was
    /// replaced.
    fn insert_or_assign(&mut self, key: K, value: V) -> bool;

    /// Looks up a value; a hit promotes the entry to most-recently-used.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if `key` is present.
    ///
    /// Defined as a promoting lookup: a hit counts as an access. Use
    /// [`ReadOnlyCache::peek`] to test presence without promotion.
    fn contains(&mut self, key: &K) -> bool;

    /// Removes every entry.
    fn clear(&mut self);
}

/// Adds arbitrary key-based removal.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes the entry for `key`, returning its value.
    fn remove(&mut self, key: &K) -> Option<V>;
}

/// Recency-specific operations.
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Promotes `key` to most-recently-used without returning its value.
    fn touch(&mut self, key: &K) -> bool;

    /// Changes the capacity bound.
    ///
    /// Shrinking evicts least-recently-used entries until the new bound
    /// holds; growing evicts nothing.
    fn resize(&mut self, new_capacity: usize);
}
