//! Application state for snow-seeker: the shared favorites store, its
//! durable storage, settings, and the context that ties them to the catalog.

pub mod context;
pub mod error;
pub mod favorites;
pub mod settings;
pub mod storage;

pub use context::{AppContext, ContextOptions, ResortRow};
pub use error::StorageError;
pub use favorites::{FAVORITES_KEY, FavoriteAction, FavoritesChange, FavoritesStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

// Re-export the lower layers so frontends need a single dependency.
pub use snow_seeker_catalog::{CatalogError, ResortCatalog};
pub use snow_seeker_core::{Facility, Resort, SortOrder};
