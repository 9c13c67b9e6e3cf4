//! Engine configuration.

/// Configuration for the search engine.
///
/// # Defaults
///
/// - `cache_capacity`: 50 parsed trees retained in the parse cache
///
/// # Example
///
/// ```
/// use kagura_core::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.cache_capacity(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of parsed trees retained by the content-addressed cache.
    cache_capacity: usize,
}

impl EngineConfig {
    /// Creates a configuration with an explicit cache capacity.
    #[must_use]
    pub const fn new(cache_capacity: usize) -> Self {
        Self { cache_capacity }
    }

    /// Returns the parse-cache capacity in entries.
    #[must_use]
    pub const fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { cache_capacity: 50 }
    }
}
