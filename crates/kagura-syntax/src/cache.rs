//! Content-addressed parse cache.
//!
//! Parsing is deterministic for identical text, so the cache keys on a
//! SHA-256 digest of the source rather than on any caller-supplied name.
//! Identical text therefore always hits, regardless of prior call path.
//!
//! The cache is not synchronised; concurrent callers must serialise access
//! externally or shard by key.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use sha2::{Digest, Sha256};

use crate::error::SyntaxError;
use crate::language::SupportedLanguage;
use crate::parser::{ParseResult, Parser};

/// Default number of parsed trees retained.
pub const DEFAULT_CAPACITY: usize = 50;

type SourceDigest = [u8; 32];

/// LRU cache of parsed trees in front of a [`Parser`].
///
/// On a hit the entry is marked most-recently-used; on a miss the source is
/// parsed, stored (evicting the least-recently-used entry at capacity), and
/// returned.  Results are shared via [`Arc`] so hits need no re-parse or
/// copy.  Hits and misses are counted and logged at debug level.
pub struct ParseCache {
    parser: Parser,
    store: LruCache<SourceDigest, Arc<ParseResult>>,
    hits: u64,
    misses: u64,
}

impl ParseCache {
    /// Creates a cache with the given entry capacity.
    ///
    /// A capacity of zero is clamped to one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying parser cannot be initialised.
    pub fn new(language: SupportedLanguage, capacity: usize) -> Result<Self, SyntaxError> {
        let entries = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Ok(Self {
            parser: Parser::new(language)?,
            store: LruCache::new(entries),
            hits: 0,
            misses: 0,
        })
    }

    /// Creates a cache with the default capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying parser cannot be initialised.
    pub fn with_default_capacity(language: SupportedLanguage) -> Result<Self, SyntaxError> {
        Self::new(language, DEFAULT_CAPACITY)
    }

    /// Returns the language this cache parses.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.parser.language()
    }

    /// Returns the cached tree for `source`, parsing and storing it first
    /// if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails on a cache miss.
    pub fn get_or_parse(&mut self, source: &str) -> Result<Arc<ParseResult>, SyntaxError> {
        let digest: SourceDigest = Sha256::digest(source.as_bytes()).into();

        if let Some(cached) = self.store.get(&digest) {
            self.hits = self.hits.saturating_add(1);
            tracing::debug!(language = %self.parser.language(), "parse cache hit");
            return Ok(Arc::clone(cached));
        }

        self.misses = self.misses.saturating_add(1);
        tracing::debug!(language = %self.parser.language(), "parse cache miss");
        let parsed = Arc::new(self.parser.parse(source)?);
        self.store.put(digest, Arc::clone(&parsed));
        Ok(parsed)
    }

    /// Returns the number of lookups served from the cache.
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Returns the number of lookups that required a parse.
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the entry capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.cap().get()
    }
}
