//! Cache Configuration
//!
//! This module provides the configuration structure for the LRU cache.
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: All parameters must be provided at construction
//! - **No boilerplate**: No constructors or builder methods needed
//!
//! # Examples
//!
//! ```
//! use lru_rs::config::LruCacheConfig;
//! use lru_rs::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//!
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! ```

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed entry when the cache reaches
/// capacity.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. The type is
///   [`NonZeroUsize`], so a zero capacity is unrepresentable rather than
///   checked at runtime; construction cannot fail.
///
/// # Examples
///
/// ```
/// use lru_rs::config::LruCacheConfig;
/// use lru_rs::LruCache;
/// use core::num::NonZeroUsize;
///
/// let config = LruCacheConfig {
///     capacity: NonZeroUsize::new(10_000).unwrap(),
/// };
/// let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
/// ```
#[derive(Clone, Copy)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Creates a configuration with the given capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { capacity }
    }

    /// Returns the configured capacity.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_config_creation() {
        let config = LruCacheConfig {
            capacity: NonZeroUsize::new(1000).unwrap(),
        };
        assert_eq!(config.capacity.get(), 1000);
        assert_eq!(config.capacity().get(), 1000);
    }

    #[test]
    fn test_lru_config_is_copy() {
        let config = LruCacheConfig::new(NonZeroUsize::new(8).unwrap());
        let copy = config;
        assert_eq!(copy.capacity.get(), config.capacity.get());
    }
}
