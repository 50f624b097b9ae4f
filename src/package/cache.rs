//! Identity-stable object instantiation cache.
//!
//! # Caching Strategy
//!
//! ```text
//! ObjectCache
//! └── FxHashMap<EntryId, Arc<ObjectInstance>>
//!     └── created once per entry, shared by every later reference
//! ```
//!
//! Repeated references to the same export must resolve to the same
//! instance so export decisions agree across call sites.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::model::{EntryId, ObjectInstance};
use crate::t3d::RenderError;

/// Cache of instantiated objects keyed by entry identity.
#[derive(Default)]
pub struct ObjectCache {
    slots: RwLock<FxHashMap<EntryId, Arc<ObjectInstance>>>,
}

impl ObjectCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached instance for `id`, creating it on first use.
    ///
    /// When two threads race on the same entry, the first insert wins and
    /// both observe that instance.
    pub fn get_or_create(
        &self,
        id: EntryId,
        create: impl FnOnce() -> Result<ObjectInstance, RenderError>,
    ) -> Result<Arc<ObjectInstance>, RenderError> {
        if let Some(object) = self.slots.read().get(&id) {
            tracing::trace!(entry = %id, "object cache hit");
            return Ok(Arc::clone(object));
        }

        tracing::trace!(entry = %id, "object cache miss");
        let created = Arc::new(create()?);
        let mut slots = self.slots.write();
        Ok(Arc::clone(slots.entry(id).or_insert(created)))
    }

    /// Whether `id` has been instantiated.
    pub fn contains(&self, id: EntryId) -> bool {
        self.slots.read().contains_key(&id)
    }

    /// Number of cached instances.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }

    /// Drop every cached instance.
    pub fn clear(&self) {
        self.slots.write().clear();
    }
}
