use std::cell::Cell;

/// A metrics-only counter cell for `&self` recording paths.
///
/// Counters are observational and do not affect cache correctness. The cache
/// itself is single-threaded, so plain `Cell` interior mutability is enough.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}
