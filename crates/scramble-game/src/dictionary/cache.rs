// Memoizing wrapper around another dictionary oracle

use std::cell::{Cell, RefCell};

use hashbrown::HashMap;

use crate::dictionary::Dictionary;

/// Default number of lookups kept before the cache is flushed.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Caches the answers of a slower oracle.
///
/// Both known and unknown answers are cached, keyed by `(locale, word)`.
/// When the cache reaches its capacity it is cleared wholesale; there is no
/// per-entry eviction. Uses interior mutability because `Dictionary` takes
/// `&self`, so the wrapper is single-threaded.
pub struct CachedDictionary<D> {
    inner: D,
    capacity: usize,
    entries: RefCell<HashMap<(String, String), bool>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<D: Dictionary> CachedDictionary<D> {
    /// Wrap `inner` with the default capacity.
    pub fn new(inner: D) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// Wrap `inner`, keeping at most `capacity` answers (minimum 1).
    pub fn with_capacity(inner: D, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner,
            capacity,
            entries: RefCell::new(HashMap::with_capacity(capacity)),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// The wrapped oracle.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    /// Number of lookups forwarded to the wrapped oracle.
    pub fn misses(&self) -> u64 {
        self.misses.get()
    }

    /// Number of cached answers.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<D: Dictionary> Dictionary for CachedDictionary<D> {
    fn is_known_word(&self, word: &str, locale: &str) -> bool {
        let key = (locale.to_string(), word.to_string());
        if let Some(&known) = self.entries.borrow().get(&key) {
            self.hits.set(self.hits.get() + 1);
            return known;
        }

        self.misses.set(self.misses.get() + 1);
        let known = self.inner.is_known_word(word, locale);

        let mut entries = self.entries.borrow_mut();
        if entries.len() >= self.capacity {
            entries.clear();
        }
        entries.insert(key, known);
        known
    }
}
