pub mod favorites;
pub mod recently_viewed;
pub mod storage;

pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use recently_viewed::{RecentlyViewedStore, MAX_RECENTLY_VIEWED, RECENTLY_VIEWED_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
