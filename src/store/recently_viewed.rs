use crate::models::PropertyId;
use crate::store::storage::{load_or_default, save, KeyValueStorage};
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Storage key holding the recently viewed list
pub const RECENTLY_VIEWED_KEY: &str = "recently-viewed";

/// Maximum number of remembered listings
pub const MAX_RECENTLY_VIEWED: usize = 10;

/// Most-recent-first history of opened listings
pub struct RecentlyViewedStore {
    storage: Arc<dyn KeyValueStorage>,
    ids: Vec<PropertyId>,
}

impl RecentlyViewedStore {
    /// Load the saved history, keeping the first occurrence of each id and
    /// at most [`MAX_RECENTLY_VIEWED`] entries
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let stored: Vec<PropertyId> = load_or_default(storage.as_ref(), RECENTLY_VIEWED_KEY);
        let mut seen = HashSet::with_capacity(stored.len());
        let ids: Vec<PropertyId> = stored
            .into_iter()
            .filter(|id| seen.insert(*id))
            .take(MAX_RECENTLY_VIEWED)
            .collect();
        debug!("Loaded {} recently viewed", ids.len());
        Self { storage, ids }
    }

    /// Move `id` to the front, evicting the oldest entry past the cap
    pub fn record(&mut self, id: PropertyId) -> Result<()> {
        self.ids.retain(|&viewed| viewed != id);
        self.ids.insert(0, id);
        self.ids.truncate(MAX_RECENTLY_VIEWED);
        self.persist()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.ids.clear();
        self.persist()
    }

    pub fn ids(&self) -> &[PropertyId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self) -> Result<()> {
        save(self.storage.as_ref(), RECENTLY_VIEWED_KEY, &self.ids)
    }
}
