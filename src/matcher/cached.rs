use std::fmt;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use super::{SuffixMatch, SuffixMatcher};

/// LRU memo in front of another matcher.
///
/// Matching is a pure function of the labels, so cached and uncached answers
/// are always identical. Negative results (`None`) are cached too.
pub struct CachedMatcher<M> {
    inner: M,
    cache: Mutex<LruCache<Vec<String>, Option<SuffixMatch>>>,
}

impl<M: SuffixMatcher> CachedMatcher<M> {
    /// Wrap `inner` with a cache of `cache_size` entries (at least one).
    pub fn new(inner: M, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// The wrapped matcher
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Number of cached entries
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}

impl<M: SuffixMatcher> SuffixMatcher for CachedMatcher<M> {
    fn longest_match(&self, labels: &[&str]) -> Option<SuffixMatch> {
        let key: Vec<String> = labels.iter().map(|label| label.to_string()).collect();

        let mut cache = self.cache.lock();
        if let Some(cached) = cache.get(&key) {
            return *cached;
        }

        // Matching is CPU-only, holding the lock avoids duplicate work
        let result = self.inner.longest_match(labels);
        cache.put(key, result);
        result
    }
}

impl<M: fmt::Debug> fmt::Debug for CachedMatcher<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.cache.lock();
        f.debug_struct("CachedMatcher")
            .field("inner", &self.inner)
            .field("cached", &cache.len())
            .field("capacity", &cache.cap())
            .finish()
    }
}
