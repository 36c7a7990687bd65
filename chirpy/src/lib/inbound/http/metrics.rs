use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Process-wide count of requests served from the static site.
#[derive(Debug, Default)]
pub struct HitCounter(AtomicU64);

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one hit and return the updated total.
    pub fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}
