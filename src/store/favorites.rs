use crate::models::PropertyId;
use crate::store::storage::{load_or_default, save, KeyValueStorage};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Storage key holding the favorites list
pub const FAVORITES_KEY: &str = "property-favorites";

/// User-curated set of favorite listings, persisted on every change
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStorage>,
    ids: Vec<PropertyId>,
}

impl FavoritesStore {
    /// Load the saved favorites; missing or corrupt state starts empty
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let ids: Vec<PropertyId> = load_or_default(storage.as_ref(), FAVORITES_KEY);
        debug!("Loaded {} favorites", ids.len());
        Self { storage, ids }
    }

    /// Add `id` if absent, remove it if present.
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: PropertyId) -> Result<bool> {
        let now_favorite = if self.ids.contains(&id) {
            self.ids.retain(|&fav| fav != id);
            false
        } else {
            self.ids.push(id);
            true
        };
        info!("Property {} {} favorites", id, if now_favorite { "added to" } else { "removed from" });
        self.persist()?;
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, id: PropertyId) -> bool {
        self.ids.contains(&id)
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
        save(self.storage.as_ref(), FAVORITES_KEY, &self.ids)
    }
}
