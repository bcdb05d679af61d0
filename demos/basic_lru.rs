//! Walkthrough of the core LRU operations.
//!
//! Run with `cargo run --example basic_lru`.

use lrukit::prelude::*;

fn main() {
    let mut cache: LruCache<&str, u32> = LruCache::new(3);

    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("c", 3);
    println!("filled to capacity: len = {}", cache.len());

    // Reading "a" promotes it, so "b" is now the eviction candidate.
    let _ = cache.get(&"a");
    cache.insert("d", 4);
    println!("after inserting \"d\": contains \"b\" = {}", cache.peek(&"b").is_some());

    // Handles stay valid across promotions of other entries.
    if let Some(id) = cache.find(&"c") {
        let _ = cache.get(&"a");
        if let Some((key, value)) = cache.entry(id) {
            println!("handle still resolves: {key} -> {value}");
        }
    }

    // Update in place without replacing the entry.
    cache.try_update(&"d", |v| *v *= 10);
    println!("updated \"d\" = {:?}", cache.peek(&"d"));

    // Most-recent-first traversal.
    print!("recency order:");
    cache.for_each(|key, value| print!(" {key}={value}"));
    println!();

    cache.resize(1);
    println!(
        "after resize(1): len = {}, survivor = {:?}",
        cache.len(),
        cache.peek_lru().map(|(k, _)| *k)
    );
}
