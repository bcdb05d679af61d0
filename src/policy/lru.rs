//! # Least Recently Used (LRU) cache
//!
//! Fixed-capacity key-value cache that evicts the least recently accessed
//! entry once the capacity bound is exceeded. All point operations run in
//! amortized O(1).
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────┐
//!   │                       LruCache<K, V, S>                        │
//!   │                                                                │
//!   │   ┌──────────────────────────────────────────────────────┐     │
//!   │   │  HashMap<K, SlotId, S>  (key index)                  │     │
//!   │   │                                                      │     │
//!   │   │  ┌─────────┬──────────────────────────────────┐      │     │
//!   │   │  │   Key   │  SlotId                          │      │     │
//!   │   │  ├─────────┼──────────────────────────────────┤      │     │
//!   │   │  │  "a"    │  ───────────────────────────┐    │      │     │
//!   │   │  │  "b"    │  ─────────────────────┐     │    │      │     │
//!   │   │  └─────────┴───────────────────────┼─────┼────┘      │     │
//!   │   └──────────────────────────────────┬─┼─────┼───────────┘     │
//!   │                                      │ │     │                 │
//!   │   ┌──────────────────────────────────▼─▼─────▼───────────┐     │
//!   │   │  RecencyList<Entry<K, V>>  (entries live here)       │     │
//!   │   │                                                      │     │
//!   │   │  head ─► [Entry] ◄──► [Entry] ◄──► [Entry] ◄── tail  │     │
//!   │   │           (MRU)                     (LRU)            │     │
//!   │   └──────────────────────────────────────────────────────┘     │
//!   └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are exclusively owned by the recency list; the index stores a
//! generation-checked [`SlotId`] per key plus one clone of the key for
//! hashing. Every mutating operation keeps the two structures in lockstep:
//! keys and entries stay in bijection, `len() <= capacity()` holds on return,
//! and front-to-back list order is exact access order.
//!
//! ## Operations
//!
//! | Method                  | Promotes on hit | Result                                   |
//! |-------------------------|-----------------|------------------------------------------|
//! | `insert(k, v)`          | no              | `true` if inserted, `false` if present   |
//! | `insert_or_assign(k, v)`| yes             | `true` if new, `false` if overwritten    |
//! | `find(&k)`              | yes             | `Option<SlotId>` (None = end sentinel)   |
//! | `get(&k)` / `get_mut`   | yes             | `Option<&V>` / `Option<&mut V>`          |
//! | `get_copy(&k)`          | yes             | `Option<V>` (requires `V: Clone`)        |
//! | `try_update(&k, f)`     | yes             | `true` if found and updated              |
//! | `contains(&k)`          | yes             | presence test, counts as an access       |
//! | `peek(&k)` / `peek_lru` | no              | read without touching recency order      |
//! | `for_each(f)` / `iter`  | no              | front-to-back traversal                  |
//! | `remove(&k)` / `pop_lru`| -               | take an entry out                        |
//! | `resize(c)` / `clear`   | -               | capacity change / drop everything        |
//!
//! ## Thread safety
//!
//! None is provided: the cache is a single-threaded data structure. Callers
//! that share one instance across threads must wrap every call (including
//! iteration) in their own mutual exclusion.
//!
//! ## Example
//!
//! ```
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache: LruCache<&str, i32> = LruCache::new(2);
//! assert!(cache.insert("a", 1));
//! assert!(cache.insert("b", 2));
//!
//! // "a" is promoted, so "b" becomes the eviction candidate.
//! assert_eq!(cache.get(&"a"), Some(&1));
//! assert!(cache.insert("c", 3));
//!
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.len(), 2);
//! ```

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::ds::recency_list::{self, RecencyList};
use crate::ds::slot_arena::SlotId;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
use crate::traits;

/// Owned (key, value) pair stored in the recency list.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity LRU cache.
///
/// `K` needs `Eq + Hash + Clone`: the index owns one clone of each key as its
/// hash probe while the entry in the recency list owns the user-visible pair.
/// The hasher `S` is pluggable and defaults to [`FxBuildHasher`]; custom key
/// identity semantics are expressed through the key type's `Hash`/`Eq` impls
/// together with a custom `S`.
///
/// A capacity of zero is valid: every inserted entry is immediately evicted
/// and the cache stays empty.
pub struct LruCache<K, V, S = FxBuildHasher> {
    index: HashMap<K, SlotId, S>,
    list: RecencyList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache with the given capacity and the default Fx hasher.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, FxBuildHasher)
    }
}

impl<K, V, S> LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Creates a cache with the given capacity and hasher.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::hash_map::RandomState;
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let cache: LruCache<String, u64, RandomState> =
    ///     LruCache::with_hasher(64, RandomState::new());
    /// assert_eq!(cache.capacity(), 64);
    /// ```
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            index: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            list: RecencyList::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Returns the number of entries currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the capacity bound.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts only if `key` is absent.
    ///
    /// Returns `false` with zero side effects when the key is already
    /// present: the stored value is kept and the entry is not promoted.
    /// On insertion the new entry starts at the most-recently-used position
    /// and the tail is evicted until the capacity bound holds, so with
    /// capacity zero the entry is created and immediately evicted (the
    /// return value is still `true`).
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache: LruCache<u32, &str> = LruCache::new(4);
    /// assert!(cache.insert(1, "one"));
    /// assert!(!cache.insert(1, "uno"));
    /// assert_eq!(cache.peek(&1), Some(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if self.index.contains_key(&key) {
            return false;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        self.insert_new(key, value);
        true
    }

    /// Inserts, or overwrites and promotes when `key` is present.
    ///
    /// Returns `true` if the entry is new, `false` if an existing value was
    /// replaced.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache: LruCache<u32, &str> = LruCache::new(4);
    /// assert!(cache.insert_or_assign(1, "one"));
    /// assert!(!cache.insert_or_assign(1, "uno"));
    /// assert_eq!(cache.peek(&1), Some(&"uno"));
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            if let Some(entry) = self.list.get_mut(id) {
                entry.value = value;
            }
            self.list.move_to_front(id);
            self.debug_validate();
            return false;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        self.insert_new(key, value);
        true
    }

    /// Looks up `key` and promotes the entry on a hit.
    ///
    /// Returns the entry's handle; `None` is the not-found sentinel. The
    /// handle stays valid across later promotions of any entry and dies when
    /// this entry is evicted, removed, or the cache is cleared. Resolve it
    /// with [`entry`](Self::entry) or [`entry_mut`](Self::entry_mut).
    pub fn find(&mut self, key: &K) -> Option<SlotId> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            }
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        Some(id)
    }

    /// Resolves a handle to the entry's key and value.
    ///
    /// Does not promote. Returns `None` for a dead handle.
    #[inline]
    pub fn entry(&self, id: SlotId) -> Option<(&K, &V)> {
        self.list.get(id).map(|entry| (&entry.key, &entry.value))
    }

    /// Resolves a handle to a mutable reference to the entry's value.
    ///
    /// Does not promote. Returns `None` for a dead handle.
    #[inline]
    pub fn entry_mut(&mut self, id: SlotId) -> Option<&mut V> {
        self.list.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Looks up a value; a hit promotes the entry.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache: LruCache<u32, &str> = LruCache::new(2);
    /// cache.insert(1, "one");
    /// assert_eq!(cache.get(&1), Some(&"one"));
    /// assert_eq!(cache.get(&2), None);
    /// ```
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = self.find(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Looks up a value mutably; a hit promotes the entry.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find(key)?;
        self.entry_mut(id)
    }

    /// Looks up a value without promoting it.
    ///
    /// The entry keeps its recency position, so a `peek` never changes which
    /// entry is evicted next.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Applies `update` to the value for `key`, promoting on a hit.
    ///
    /// The closure receives `&mut V` only; the key is not reachable from it
    /// and cannot be altered. Returns `true` if the key was found.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache: LruCache<&str, i32> = LruCache::new(2);
    /// cache.insert("hits", 0);
    /// assert!(cache.try_update(&"hits", |v| *v += 1));
    /// assert!(!cache.try_update(&"missing", |v| *v += 1));
    /// assert_eq!(cache.peek(&"hits"), Some(&1));
    /// ```
    pub fn try_update(&mut self, key: &K, update: impl FnOnce(&mut V)) -> bool {
        let Some(id) = self.find(key) else {
            return false;
        };
        match self.list.get_mut(id) {
            Some(entry) => {
                update(&mut entry.value);
                true
            }
            None => false,
        }
    }

    /// Visits every entry front-to-back (most-recent-first).
    ///
    /// Values are mutable, keys are not, and recency order is left exactly
    /// as it was: visiting is not an access.
    pub fn for_each(&mut self, mut visit: impl FnMut(&K, &mut V)) {
        let mut current = self.list.front_id();
        while let Some(id) = current {
            current = self.list.next_id(id);
            if let Some(entry) = self.list.get_mut(id) {
                visit(&entry.key, &mut entry.value);
            }
        }
    }

    /// Returns `true` if `key` is present; a hit promotes the entry.
    ///
    /// This is a [`find`](Self::find) in disguise and counts as an access.
    /// Use [`peek`](Self::peek) to test presence without promotion.
    #[inline]
    pub fn contains(&mut self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        let entry = self.list.remove(id);
        self.debug_validate();
        entry.map(|entry| entry.value)
    }

    /// Removes and returns the least recently used entry.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache: LruCache<u32, &str> = LruCache::new(3);
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    /// cache.get(&1); // promote 1; 2 becomes LRU
    /// assert_eq!(cache.pop_lru(), Some((2, "two")));
    /// ```
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let popped = self.evict_lru();

        #[cfg(feature = "metrics")]
        if popped.is_some() {
            self.metrics.record_pop_lru_found();
        }

        self.debug_validate();
        popped
    }

    /// Returns the least recently used entry without removing or promoting it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_call();

        let back = self.list.back().map(|entry| (&entry.key, &entry.value));

        #[cfg(feature = "metrics")]
        if back.is_some() {
            self.metrics.record_peek_lru_found();
        }

        back
    }

    /// Promotes `key` to most-recently-used without returning its value.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        if let Some(&id) = self.index.get(key) {
            self.list.move_to_front(id);

            #[cfg(feature = "metrics")]
            self.metrics.record_touch_found();

            true
        } else {
            false
        }
    }

    /// Changes the capacity bound.
    ///
    /// Shrinking evicts least-recently-used entries until `len() <=
    /// new_capacity`; growing evicts nothing. O(k) for k evictions.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache: LruCache<u32, u32> = LruCache::new(3);
    /// for i in 0..3 {
    ///     cache.insert(i, i);
    /// }
    /// cache.resize(1);
    /// assert_eq!(cache.len(), 1);
    /// assert!(cache.peek(&2).is_some()); // most recent survives
    /// ```
    pub fn resize(&mut self, new_capacity: usize) {
        #[cfg(feature = "metrics")]
        self.metrics.record_resize_call();

        self.prune_to(new_capacity);
        self.capacity = new_capacity;
        self.debug_validate();
    }

    /// Removes every entry from both structures.
    ///
    /// All outstanding handles die; capacity is unchanged.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.list.clear();
    }

    /// Iterates `(&K, &V)` pairs front-to-back (most-recent-first).
    ///
    /// Iteration never promotes.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Creates a fresh entry at the MRU position, indexes it, and prunes.
    fn insert_new(&mut self, key: K, value: V) {
        let index_key = key.clone();
        let id = self.list.push_front(Entry { key, value });
        self.index.insert(index_key, id);
        self.prune_to(self.capacity);
        self.debug_validate();
    }

    /// Evicts from the tail until at most `capacity` entries remain.
    fn prune_to(&mut self, capacity: usize) {
        while self.list.len() > capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if self.evict_lru().is_some() {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
            }
        }
    }

    /// Removes the tail entry from both structures.
    fn evict_lru(&mut self) -> Option<(K, V)> {
        let id = self.list.back_id()?;
        let entry = self.list.remove(id)?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    #[inline]
    fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        if let Err(err) = self.check_invariants() {
            panic!("lru invariant violated: {err}");
        }
    }

    /// Validates the bijection, capacity, and list-structure invariants.
    ///
    /// Debug/test builds only; O(n).
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index has {} keys but list has {} entries",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.list.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.list.len(),
                self.capacity
            )));
        }
        let mut walked = 0usize;
        for (id, entry) in self.list.iter_entries() {
            walked += 1;
            match self.index.get(&entry.key) {
                Some(&mapped) if mapped == id => {}
                Some(_) => {
                    return Err(InvariantError::new(
                        "index maps a key to a different entry than the one holding it",
                    ));
                }
                None => {
                    return Err(InvariantError::new("entry key missing from index"));
                }
            }
        }
        if walked != self.list.len() {
            return Err(InvariantError::new(format!(
                "list walk visited {} entries, expected {}",
                walked,
                self.list.len()
            )));
        }
        Ok(())
    }
}

impl<K, V, S> LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Looks up a value and returns an independent clone; a hit promotes.
    ///
    /// Mutating the returned value never affects the cached one. This is the
    /// only method requiring `V: Clone`.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache: LruCache<u32, String> = LruCache::new(2);
    /// cache.insert(1, "one".to_string());
    ///
    /// let mut copy = cache.get_copy(&1).unwrap();
    /// copy.push_str("!!");
    /// assert_eq!(cache.peek(&1), Some(&"one".to_string()));
    /// ```
    #[inline]
    pub fn get_copy(&mut self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }
}

#[cfg(feature = "metrics")]
impl<K, V, S> LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Returns a point-in-time copy of the operation counters.
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            resize_calls: self.metrics.resize_calls,
            clear_calls: self.metrics.clear_calls,
            cache_len: self.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V, S> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

/// Front-to-back iterator over `(&K, &V)` pairs.
pub struct Iter<'a, K, V> {
    inner: recency_list::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }
}

impl<'a, K, V, S> IntoIterator for &'a LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Trait implementations
// ---------------------------------------------------------------------------

impl<K, V, S> traits::ReadOnlyCache<K, V> for LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        self.len()
    }

    fn capacity(&self) -> usize {
        self.capacity()
    }

    fn peek(&self, key: &K) -> Option<&V> {
        self.peek(key)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        self.peek_lru()
    }
}

impl<K, V, S> traits::CoreCache<K, V> for LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn insert(&mut self, key: K, value: V) -> bool {
        self.insert(key, value)
    }

    fn insert_or_assign(&mut self, key: K, value: V) -> bool {
        self.insert_or_assign(key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn contains(&mut self, key: &K) -> bool {
        self.contains(key)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

impl<K, V, S> traits::MutableCache<K, V> for LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }
}

impl<K, V, S> traits::LruCacheTrait<K, V> for LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        self.pop_lru()
    }

    fn touch(&mut self, key: &K) -> bool {
        self.touch(key)
    }

    fn resize(&mut self, new_capacity: usize) {
        self.resize(new_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut cache: LruCache<u32, &str> = LruCache::new(3);

        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 3);

        assert!(cache.insert(1, "one"));
        assert!(cache.insert(2, "two"));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&1), Some(&"one"));
        assert_eq!(cache.get(&2), Some(&"two"));
        assert_eq!(cache.get(&3), None);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn insert_existing_key_is_a_noop() {
        let mut cache: LruCache<u32, &str> = LruCache::new(2);

        assert!(cache.insert(1, "one"));
        assert!(cache.insert(2, "two"));

        // Duplicate insert: false, value kept, and no promotion either.
        assert!(!cache.insert(1, "uno"));
        assert_eq!(cache.peek(&1), Some(&"one"));
        assert_eq!(cache.peek_lru(), Some((&1, &"one")));

        // 1 is still LRU, so it is the one evicted.
        cache.insert(3, "three");
        assert_eq!(cache.peek(&1), None);
    }

    #[test]
    fn insert_or_assign_overwrites_and_promotes() {
        let mut cache: LruCache<u32, &str> = LruCache::new(2);

        assert!(cache.insert_or_assign(1, "one"));
        assert!(cache.insert_or_assign(2, "two"));

        assert!(!cache.insert_or_assign(1, "uno"));
        assert_eq!(cache.peek(&1), Some(&"uno"));

        // 1 was promoted by the assignment, so 2 is evicted next.
        cache.insert(3, "three");
        assert!(cache.peek(&2).is_none());
        assert!(cache.peek(&1).is_some());
    }

    #[test]
    fn eviction_follows_recency() {
        let mut cache: LruCache<u32, &str> = LruCache::new(2);

        cache.insert(1, "one");
        cache.insert(2, "two");
        cache.get(&1);
        cache.insert(3, "three");

        assert!(cache.peek(&1).is_some());
        assert!(cache.peek(&2).is_none());
        assert!(cache.peek(&3).is_some());
        cache.check_invariants().unwrap();
    }

    #[test]
    fn spec_worked_example() {
        // capacity 2: a, b, c -> a evicted; find(b); d -> c evicted.
        let mut cache: LruCache<&str, i32> = LruCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("c", 3);

        assert_eq!(cache.len(), 2);
        assert!(cache.find(&"a").is_none());
        assert_eq!(cache.peek(&"b"), Some(&2));
        assert_eq!(cache.peek(&"c"), Some(&3));

        assert!(cache.find(&"b").is_some());
        cache.insert("d", 4);

        assert!(cache.peek(&"c").is_none());
        assert_eq!(cache.peek(&"b"), Some(&2));
        assert_eq!(cache.peek(&"d"), Some(&4));
    }

    #[test]
    fn find_returns_stable_handle() {
        let mut cache: LruCache<u32, &str> = LruCache::new(3);
        cache.insert(1, "one");
        cache.insert(2, "two");
        cache.insert(3, "three");

        let id = cache.find(&2).expect("present");
        assert_eq!(cache.entry(id), Some((&2, &"two")));

        // Promotions of other entries leave the handle valid.
        cache.get(&1);
        cache.get(&3);
        assert_eq!(cache.entry(id), Some((&2, &"two")));

        if let Some(value) = cache.entry_mut(id) {
            *value = "TWO";
        }
        assert_eq!(cache.peek(&2), Some(&"TWO"));
    }

    #[test]
    fn handle_dies_on_eviction() {
        let mut cache: LruCache<u32, &str> = LruCache::new(2);
        cache.insert(1, "one");
        let id = cache.find(&1).expect("present");

        cache.insert(2, "two");
        cache.insert(3, "three"); // evicts 1

        assert_eq!(cache.entry(id), None);
        assert_eq!(cache.entry_mut(id), None);
    }

    #[test]
    fn handle_dies_on_clear() {
        let mut cache: LruCache<u32, &str> = LruCache::new(2);
        cache.insert(1, "one");
        let id = cache.find(&1).expect("present");

        cache.clear();
        assert_eq!(cache.entry(id), None);

        cache.insert(9, "nine");
        assert_eq!(cache.entry(id), None);
    }

    #[test]
    fn contains_promotes() {
        let mut cache: LruCache<u32, &str> = LruCache::new(2);
        cache.insert(1, "one");
        cache.insert(2, "two");

        assert!(cache.contains(&1));
        cache.insert(3, "three"); // 2 is now LRU

        assert!(cache.peek(&1).is_some());
        assert!(cache.peek(&2).is_none());
    }

    #[test]
    fn peek_does_not_promote() {
        let mut cache: LruCache<u32, &str> = LruCache::new(2);
        cache.insert(1, "one");
        cache.insert(2, "two");

        assert_eq!(cache.peek(&1), Some(&"one"));
        cache.insert(3, "three"); // 1 still LRU

        assert!(cache.peek(&1).is_none());
    }

    #[test]
    fn get_mut_updates_and_promotes() {
        let mut cache: LruCache<u32, i32> = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);

        if let Some(value) = cache.get_mut(&1) {
            *value = 11;
        }
        cache.insert(3, 30); // evicts 2

        assert_eq!(cache.peek(&1), Some(&11));
        assert!(cache.peek(&2).is_none());
    }

    #[test]
    fn get_copy_is_independent() {
        let mut cache: LruCache<u32, Vec<u8>> = LruCache::new(2);
        cache.insert(1, vec![1, 2, 3]);

        let mut copy = cache.get_copy(&1).unwrap();
        copy.push(4);

        assert_eq!(cache.peek(&1), Some(&vec![1, 2, 3]));
        assert_eq!(cache.get_copy(&9), None);
    }

    #[test]
    fn try_update_promotes_on_hit() {
        let mut cache: LruCache<u32, i32> = LruCache::new(2);
        cache.insert(1, 10);
        cache.insert(2, 20);

        assert!(cache.try_update(&1, |v| *v += 1));
        assert!(!cache.try_update(&9, |v| *v += 1));

        cache.insert(3, 30); // evicts 2, since 1 was just updated
        assert_eq!(cache.peek(&1), Some(&11));
        assert!(cache.peek(&2).is_none());
    }

    #[test]
    fn for_each_visits_in_recency_order_without_promoting() {
        let mut cache: LruCache<u32, i32> = LruCache::new(3);
        cache.insert(1, 10);
        cache.insert(2, 20);
        cache.insert(3, 30);
        cache.get(&2);

        let mut seen = Vec::new();
        cache.for_each(|key, value| {
            seen.push(*key);
            *value += 1;
        });
        assert_eq!(seen, vec![2, 3, 1]);

        // Order unchanged by the traversal.
        let order: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(cache.peek(&1), Some(&11));
        assert_eq!(cache.peek(&2), Some(&21));
        assert_eq!(cache.peek(&3), Some(&31));
    }

    #[test]
    fn iter_runs_front_to_back() {
        let mut cache: LruCache<u32, &str> = LruCache::new(3);
        cache.insert(1, "one");
        cache.insert(2, "two");
        cache.insert(3, "three");

        let keys: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![3, 2, 1]);

        let pairs: Vec<_> = (&cache).into_iter().collect();
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn remove_by_key() {
        let mut cache: LruCache<u32, &str> = LruCache::new(3);
        cache.insert(1, "one");
        cache.insert(2, "two");

        assert_eq!(cache.remove(&1), Some("one"));
        assert_eq!(cache.remove(&1), None);
        assert_eq!(cache.len(), 1);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn pop_and_peek_lru() {
        let mut cache: LruCache<u32, &str> = LruCache::new(3);
        cache.insert(1, "one");
        cache.insert(2, "two");
        cache.insert(3, "three");

        assert_eq!(cache.peek_lru(), Some((&1, &"one")));
        assert_eq!(cache.pop_lru(), Some((1, "one")));
        assert_eq!(cache.pop_lru(), Some((2, "two")));
        assert_eq!(cache.pop_lru(), Some((3, "three")));
        assert_eq!(cache.pop_lru(), None);
        assert_eq!(cache.peek_lru(), None);
    }

    #[test]
    fn touch_promotes_without_reading() {
        let mut cache: LruCache<u32, &str> = LruCache::new(2);
        cache.insert(1, "one");
        cache.insert(2, "two");

        assert!(cache.touch(&1));
        assert!(!cache.touch(&9));

        cache.insert(3, "three"); // evicts 2
        assert!(cache.peek(&1).is_some());
        assert!(cache.peek(&2).is_none());
    }

    #[test]
    fn resize_shrink_evicts_oldest_first() {
        let mut cache: LruCache<u32, u32> = LruCache::new(4);
        for i in 0..4 {
            cache.insert(i, i * 10);
        }
        cache.get(&0); // order front-to-back: 0, 3, 2, 1

        cache.resize(2);
        assert_eq!(cache.capacity(), 2);
        assert_eq!(cache.len(), 2);
        assert!(cache.peek(&0).is_some());
        assert!(cache.peek(&3).is_some());
        assert!(cache.peek(&1).is_none());
        assert!(cache.peek(&2).is_none());
        cache.check_invariants().unwrap();
    }

    #[test]
    fn resize_grow_never_evicts() {
        let mut cache: LruCache<u32, u32> = LruCache::new(2);
        cache.insert(1, 1);
        cache.insert(2, 2);

        cache.resize(10);
        assert_eq!(cache.capacity(), 10);
        assert_eq!(cache.len(), 2);

        cache.insert(3, 3);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn zero_capacity_accepts_and_immediately_evicts() {
        let mut cache: LruCache<u32, &str> = LruCache::new(0);

        assert!(cache.insert(1, "one"));
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), None);

        assert!(cache.insert_or_assign(2, "two"));
        assert!(cache.is_empty());
        cache.check_invariants().unwrap();
    }

    #[test]
    fn resize_to_zero_empties_the_cache() {
        let mut cache: LruCache<u32, u32> = LruCache::new(3);
        cache.insert(1, 1);
        cache.insert(2, 2);

        cache.resize(0);
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 0);

        cache.insert(3, 3);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut cache: LruCache<u32, &str> = LruCache::new(3);
        cache.insert(1, "one");
        cache.insert(2, "two");

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.capacity(), 3);

        // Reusable after clear.
        assert!(cache.insert(1, "one again"));
        assert_eq!(cache.get(&1), Some(&"one again"));
    }

    #[test]
    fn distinct_keys_up_to_capacity_all_found() {
        let mut cache: LruCache<u32, u32> = LruCache::new(64);
        for i in 0..64 {
            assert!(cache.insert(i, i));
        }
        assert_eq!(cache.len(), 64);
        for i in 0..64 {
            assert_eq!(cache.get(&i), Some(&i));
        }
        cache.check_invariants().unwrap();
    }

    #[test]
    fn insertion_order_preserved_among_untouched_entries() {
        let mut cache: LruCache<u32, u32> = LruCache::new(4);
        for i in 0..4 {
            cache.insert(i, i);
        }

        // No lookups: eviction proceeds in insertion order.
        cache.insert(4, 4);
        assert!(cache.peek(&0).is_none());
        cache.insert(5, 5);
        assert!(cache.peek(&1).is_none());
        assert!(cache.peek(&2).is_some());
    }

    #[test]
    fn custom_hasher_type_parameter() {
        use std::collections::hash_map::RandomState;

        let mut cache: LruCache<String, u32, RandomState> =
            LruCache::with_hasher(2, RandomState::new());
        assert!(cache.insert("a".to_string(), 1));
        assert_eq!(cache.get(&"a".to_string()), Some(&1));
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_snapshot_tracks_operations() {
        let mut cache: LruCache<u32, u32> = LruCache::new(2);
        cache.insert(1, 1);
        cache.insert(2, 2);
        cache.insert(3, 3); // evicts
        cache.get(&2);
        cache.get(&99);
        cache.peek_lru();

        let snap = cache.metrics_snapshot();
        assert_eq!(snap.insert_calls, 3);
        assert_eq!(snap.insert_new, 3);
        assert_eq!(snap.evicted_entries, 1);
        assert_eq!(snap.get_hits, 1);
        assert_eq!(snap.get_misses, 1);
        assert_eq!(snap.peek_lru_calls, 1);
        assert_eq!(snap.cache_len, 2);
        assert_eq!(snap.capacity, 2);
        assert_eq!(snap.hit_ratio(), Some(0.5));
    }
}
