// this_file: backends/posterline-core/src/cache.rs

//! Run-width caching.
//!
//! A run is measured when a heading is fitted and again when it is painted at
//! the accepted size, and a poster measures the same labels for several
//! layout decisions. Widths are cached per (font, text, size).

use crate::types::FontId;
use crate::utils::quantize_size;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(512) {
    Some(n) => n,
    None => unreachable!(),
};

/// Key for width lookups
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct MeasureKey {
    pub font: FontId,
    pub text: String,
    pub size: u32, // Quantized size
}

impl MeasureKey {
    pub fn new(font: FontId, text: &str, size: f32) -> Self {
        Self {
            font,
            text: text.to_string(),
            size: quantize_size(size),
        }
    }
}

/// LRU cache of measured run widths.
pub struct MeasureCache {
    widths: Mutex<LruCache<MeasureKey, f32>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MeasureCache {
    /// Create a cache holding at most `capacity` widths (512 when zero).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_CAPACITY);
        Self {
            widths: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &MeasureKey) -> Option<f32> {
        let found = self.widths.lock().get(key).copied();
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    pub fn insert(&self, key: MeasureKey, width: f32) {
        self.widths.lock().put(key, width);
    }

    /// Return the cached width or compute, store and return it.
    pub fn get_or_insert_with(&self, key: MeasureKey, measure: impl FnOnce() -> f32) -> f32 {
        if let Some(width) = self.get(&key) {
            return width;
        }
        let width = measure();
        self.insert(key, width);
        width
    }

    pub fn clear(&self) {
        self.widths.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        let widths = self.widths.lock();
        CacheStats {
            capacity: widths.cap().get(),
            entries: widths.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for MeasureCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY.get())
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub capacity: usize,
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}
