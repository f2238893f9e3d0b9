//! Per-scope graph cache
//!
//! Maps each scope key to exactly one [`ObjectGraph`].
//!
//! ```text
//! get_or_build(key)
//!        │
//!        ▼
//! DashMap<K, Arc<OnceCell<Arc<ObjectGraph>>>>   ← shard lock held only to
//!        │                                         fetch or create the slot
//!        ▼
//! slot.get_or_try_init(build)                   ← one builder per key, other
//!                                                  callers wait on the slot
//! ```
//!
//! A failed build leaves the slot empty, so a caller already waiting on the
//! slot runs the builder again. The last caller holding a failed slot
//! removes it from the map. Failures are never cached.

use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use imi_domain::error::Result;
use imi_domain::ProjectId;
use once_cell::sync::OnceCell;
use tracing::debug;

use super::graph::ObjectGraph;

type Slot = Arc<OnceCell<Arc<ObjectGraph>>>;

/// Concurrent, lazily populated scope → graph map with single-flight builds
pub struct ScopeGraphCache<K = ProjectId> {
    slots: DashMap<K, Slot>,
    builds: AtomicUsize,
}

impl<K> ScopeGraphCache<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// Graph for `key`, running `build` if no graph has been published yet
    pub fn get_or_build<F>(&self, key: &K, build: F) -> Result<Arc<ObjectGraph>>
    where
        F: FnOnce() -> Result<ObjectGraph>,
    {
        let slot = Arc::clone(&self.slots.entry(key.clone()).or_default());

        if let Some(graph) = slot.get() {
            debug!("Graph cache hit");
            return Ok(Arc::clone(graph));
        }

        let built = slot
            .get_or_try_init(|| {
                let graph = build()?;
                self.builds.fetch_add(1, Ordering::Relaxed);
                Ok(Arc::new(graph))
            })
            .map(Arc::clone);

        if built.is_err() {
            self.discard_empty_slot(key, &slot);
        }
        built
    }

    /// Drop `slot` after a failed build unless another caller still holds it
    ///
    /// The map and this caller hold two strong references; any more means a
    /// waiting caller will retry the build in this slot.
    fn discard_empty_slot(&self, key: &K, slot: &Slot) {
        let removed = self
            .slots
            .remove_if(key, |_, current| {
                current.get().is_none()
                    && Arc::ptr_eq(current, slot)
                    && Arc::strong_count(current) == 2
            })
            .is_some();
        if removed {
            debug!("Discarded empty graph slot after failed build");
        }
    }

    /// Number of slots held in the map, published or not
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Published graph for `key`, without building
    pub fn get(&self, key: &K) -> Option<Arc<ObjectGraph>> {
        self.slots
            .get(key)
            .and_then(|slot| slot.get().map(Arc::clone))
    }

    /// Whether a graph has been published for `key`
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Drop the graph for `key`; the next lookup builds a new one
    ///
    /// A build still running for `key` publishes into the detached slot and
    /// is not observed by later lookups.
    pub fn remove(&self, key: &K) -> Option<Arc<ObjectGraph>> {
        self.slots
            .remove(key)
            .and_then(|(_, slot)| slot.get().map(Arc::clone))
    }

    /// Drop every graph
    pub fn clear(&self) {
        self.slots.clear();
    }

    /// Keys with a published graph
    pub fn keys(&self) -> Vec<K> {
        self.slots
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Number of published graphs
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .count()
    }

    /// Whether no graph has been published
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful builds since creation
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}

impl<K> Default for ScopeGraphCache<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
