//! Application root.
//!
//! [`AppContext`] owns the catalog and the one [`FavoritesStore`]. Views get
//! the store through [`AppContext::favorites`], a shared handle, so every
//! consumer reads and mutates the same instance.

use std::path::PathBuf;
use std::sync::Arc;

use snow_seeker_catalog::{CatalogError, ResortCatalog};
use snow_seeker_core::{Resort, SortOrder};

use crate::favorites::FavoritesStore;
use crate::storage::FileStore;

/// Where the context loads its data from.
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    /// Directory for durable app data (favorites).
    pub data_dir: PathBuf,
    /// External dataset replacing the bundled one.
    pub catalog_path: Option<PathBuf>,
}

impl ContextOptions {
    /// Resolve options from CLI overrides, the settings file, and defaults.
    pub fn resolve(data_dir: Option<PathBuf>, catalog_path: Option<PathBuf>) -> Self {
        Self {
            data_dir: crate::settings::resolve_data_dir(data_dir),
            catalog_path: crate::settings::resolve_catalog_path(catalog_path),
        }
    }
}

/// A resort as shown in the list: the record plus its favorite flag.
#[derive(Debug, Clone, Copy)]
pub struct ResortRow<'a> {
    pub resort: &'a Resort,
    pub favorite: bool,
}

/// Context holding the catalog and the shared favorites store.
///
/// This is the main entry point for frontends: open a context, then query
/// resorts and hand out [`AppContext::favorites`] to whatever needs it.
#[derive(Debug)]
pub struct AppContext {
    catalog: ResortCatalog,
    favorites: Arc<FavoritesStore>,
}

impl AppContext {
    /// Assemble a context from parts.
    pub fn new(catalog: ResortCatalog, favorites: FavoritesStore) -> Self {
        Self {
            catalog,
            favorites: Arc::new(favorites),
        }
    }

    /// Load the catalog and restore favorites from `options.data_dir`.
    ///
    /// A catalog that cannot be loaded is fatal; favorites never are.
    pub fn open(options: &ContextOptions) -> Result<Self, CatalogError> {
        let catalog = match &options.catalog_path {
            Some(path) => ResortCatalog::load(path)?,
            None => ResortCatalog::bundled()?,
        };
        let favorites = FavoritesStore::open(FileStore::new(&options.data_dir));
        log::debug!(
            "Opened context: {} resorts, {} favorites, data in {}",
            catalog.len(),
            favorites.len(),
            options.data_dir.display()
        );
        Ok(Self::new(catalog, favorites))
    }

    pub fn catalog(&self) -> &ResortCatalog {
        &self.catalog
    }

    /// Shared handle to the favorites store.
    pub fn favorites(&self) -> &Arc<FavoritesStore> {
        &self.favorites
    }

    pub fn resort(&self, id: &str) -> Option<&Resort> {
        self.catalog.get(id)
    }

    /// The list view: filtered, sorted, and tagged with favorite status.
    pub fn resort_rows(&self, query: &str, sort: SortOrder) -> Vec<ResortRow<'_>> {
        self.catalog
            .query(query, sort)
            .into_iter()
            .map(|resort| ResortRow {
                resort,
                favorite: self.favorites.contains(&resort.id),
            })
            .collect()
    }

    /// Favorited resorts in catalog order.
    ///
    /// Saved ids that no longer exist in the catalog are skipped, not
    /// dropped from storage.
    pub fn favorite_resorts(&self) -> Vec<&Resort> {
        self.catalog
            .iter()
            .filter(|resort| self.favorites.contains(&resort.id))
            .collect()
    }
}
