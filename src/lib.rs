#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! This section provides quick code examples and API references.
//!
//! ## Basic Usage
//!
//! ```rust
//! use lru_rs::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ## Configuration
//!
//! Construction can also go through a config struct:
//!
//! ```rust
//! use lru_rs::LruCache;
//! use lru_rs::config::LruCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let mut cache: LruCache<String, i32> = LruCache::init(config, None);
//! cache.put("answer".to_string(), 42);
//! ```
//!
//! ## Ordered Iteration
//!
//! Entries can be walked in recency order without touching them:
//!
//! ```rust
//! use lru_rs::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache = LruCache::new(NonZeroUsize::new(3).unwrap());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//!
//! // Most recently used first
//! let keys: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, ["c", "b", "a"]);
//! ```
//!
//! ## Concurrent Use
//!
//! The cache itself is single-threaded; share it behind a lock:
//!
//! ```rust
//! use lru_rs::LruCache;
//! use core::num::NonZeroUsize;
//! use std::sync::{Arc, Mutex};
//!
//! let cache = Arc::new(Mutex::new(LruCache::new(NonZeroUsize::new(100).unwrap())));
//!
//! let cache_clone = Arc::clone(&cache);
//! std::thread::spawn(move || {
//!     cache_clone.lock().unwrap().put("key".to_string(), 42);
//! })
//! .join()
//! .unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`config`]: Configuration structure for the cache

#![no_std]

/// Cache configuration structure.
///
/// Provides the configuration structure for the LRU cache.
pub mod config;

/// Doubly linked list over a slot arena with in-place editing capabilities.
///
/// This module provides a memory-efficient doubly linked list that allows
/// for efficient insertion, removal, and reordering operations. Nodes are
/// addressed by stable arena indices and the list is bounded by two
/// reserved sentinel slots.
///
/// **Note**: This module is internal infrastructure and is not exposed to
/// library consumers. Use the high-level cache implementation instead.
pub(crate) mod list;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items
/// when the capacity is reached.
pub mod lru;

// Re-export cache type
pub use lru::LruCache;
