//! Per-request build memoization using moka.
//!
//! A [`BuildCache`] holds at most one built value. Callers sharing a cache
//! share one build: concurrent `get_or_build` calls on an empty cache run the
//! builder once and the rest wait for its result. There is no cross-request
//! caching and no invalidation; drop the cache with the request.

use std::sync::Arc;

use moka::sync::Cache;

use crate::graph::EntityGraph;

pub struct BuildCache<T: Send + Sync + 'static> {
    slot: Cache<(), Arc<T>>,
}

pub type GraphBuildCache = BuildCache<EntityGraph>;

impl<T: Send + Sync + 'static> BuildCache<T> {
    pub fn new() -> Self {
        Self {
            slot: Cache::new(1),
        }
    }

    /// Return the cached value, building it first if needed.
    pub fn get_or_build(&self, build: impl FnOnce() -> T) -> Arc<T> {
        self.slot.get_with((), || Arc::new(build()))
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.get(&())
    }

    pub fn is_built(&self) -> bool {
        self.slot.contains_key(&())
    }
}

impl<T: Send + Sync + 'static> Default for BuildCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build through `cache` when given, else build fresh.
pub fn build_with_cache<T: Send + Sync + 'static>(
    cache: Option<&BuildCache<T>>,
    build: impl FnOnce() -> T,
) -> Arc<T> {
    match cache {
        Some(cache) => cache.get_or_build(build),
        None => Arc::new(build()),
    }
}
