//! Thread-safe OID filter.
//!
//! Freezes a loaded [`OidTrie`] and answers [`OidTrie::match_prefix`] queries
//! through an LRU cache, so one filter can be shared across threads.

use std::num::NonZeroUsize;
use std::path::Path;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

use crate::config::{Alphabet, TrieConfig};
use crate::error::Result;
use crate::parser::{parse_prefixes, parse_prefixes_from_file};
use crate::trie::OidTrie;

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Prefix filter with LRU caching
pub struct PrefixFilter<A = TrieConfig> {
    trie: OidTrie<A>,
    cache: Mutex<LruCache<String, bool>>,
}

impl<A: Alphabet> PrefixFilter<A> {
    /// Create a filter over an already loaded trie.
    pub fn new(trie: OidTrie<A>, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        debug!(
            prefixes = trie.len(),
            nodes = trie.node_count(),
            cache_size = cache_size.get(),
            "prefix filter ready"
        );
        Self {
            trie,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Build a filter from a set of prefixes.
    pub fn from_prefixes<I, S>(config: A, prefixes: I, cache_size: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trie = OidTrie::with_prefixes(config, prefixes)?;
        Ok(Self::new(trie, cache_size))
    }

    /// Build a filter from prefix list text, see [`parse_prefixes`].
    pub fn from_text(config: A, text: &str, cache_size: usize) -> Result<Self> {
        let prefixes = parse_prefixes(text)?;
        Self::from_prefixes(config, prefixes, cache_size)
    }

    /// Build a filter from a prefix list file.
    pub fn from_file(config: A, path: impl AsRef<Path>, cache_size: usize) -> Result<Self> {
        let prefixes = parse_prefixes_from_file(path)?;
        Self::from_prefixes(config, prefixes, cache_size)
    }

    /// Check an OID against the configured prefixes.
    ///
    /// Same answer as [`OidTrie::match_prefix`].
    pub fn matches(&self, oid: &str) -> bool {
        let mut cache = self.cache.lock();

        if let Some(&cached) = cache.get(oid) {
            return cached;
        }

        // Matching is a bounded in-memory walk, fine to do under the lock.
        let result = self.trie.match_prefix(oid);
        cache.put(oid.to_string(), result);
        result
    }

    /// Check whether `oid` is one of the configured prefixes exactly.
    pub fn contains(&self, oid: &str) -> bool {
        self.trie.find(oid)
    }

    /// Get the number of distinct prefixes
    pub fn prefix_count(&self) -> usize {
        self.trie.len()
    }

    pub fn trie(&self) -> &OidTrie<A> {
        &self.trie
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Number of cached results
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }
}
