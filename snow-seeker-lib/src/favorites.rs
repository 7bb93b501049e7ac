//! The shared set of favorited resort ids.
//!
//! One [`FavoritesStore`] exists per application; every consumer gets a
//! handle to it rather than a copy. Each change is written through to
//! durable storage before the call returns, then announced to observers.

use std::collections::BTreeSet;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Storage key the favorites set lives under.
pub const FAVORITES_KEY: &str = "favorites";

/// Notification delivered to observers after a membership change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesChange {
    Added(String),
    Removed(String),
}

impl FavoritesChange {
    /// The resort id that changed.
    pub fn id(&self) -> &str {
        match self {
            Self::Added(id) | Self::Removed(id) => id,
        }
    }
}

struct Inner {
    ids: BTreeSet<String>,
    storage: Box<dyn KeyValueStore>,
    observers: Vec<Sender<FavoritesChange>>,
}

/// The favorites set, its persistence, and its observers.
///
/// All mutations hold one lock across update, persist and notify, so
/// concurrent callers are serialized and observers always see the state
/// their notification describes.
pub struct FavoritesStore {
    inner: Mutex<Inner>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("FavoritesStore")
            .field("ids", &inner.ids)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

impl FavoritesStore {
    /// Open the store, restoring any previously saved set from `storage`.
    ///
    /// Missing or unreadable data yields an empty set; the problem is logged,
    /// never returned.
    pub fn open(storage: impl KeyValueStore + 'static) -> Self {
        let ids = restore(&storage);
        log::debug!("Restored {} favorite(s)", ids.len());
        Self {
            inner: Mutex::new(Inner {
                ids,
                storage: Box::new(storage),
                observers: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().ids.contains(id)
    }

    /// Favorite `id`. Returns whether membership changed.
    ///
    /// Adding an id that is already present does nothing: no write, no
    /// notification.
    pub fn add(&self, id: &str) -> bool {
        let mut inner = self.lock();
        if !inner.ids.insert(id.to_string()) {
            return false;
        }
        inner.commit(FavoritesChange::Added(id.to_string()));
        true
    }

    /// Unfavorite `id`. Returns whether membership changed.
    pub fn remove(&self, id: &str) -> bool {
        let mut inner = self.lock();
        if !inner.ids.remove(id) {
            return false;
        }
        inner.commit(FavoritesChange::Removed(id.to_string()));
        true
    }

    /// Register an observer. It receives one [`FavoritesChange`] per
    /// membership change made after this call.
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<FavoritesChange> {
        let (tx, rx) = mpsc::channel();
        self.lock().observers.push(tx);
        rx
    }

    pub fn len(&self) -> usize {
        self.lock().ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().ids.is_empty()
    }

    /// Snapshot of the favorited ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        self.lock().ids.iter().cloned().collect()
    }
}

impl Inner {
    /// Persist the full set, then tell every live observer.
    ///
    /// A failed write keeps the in-memory change and still notifies. The
    /// next successful write stores the whole set, so the change is saved
    /// then.
    fn commit(&mut self, change: FavoritesChange) {
        let result =
            encode_ids(&self.ids).and_then(|bytes| self.storage.set(FAVORITES_KEY, &bytes));
        if let Err(e) = result {
            log::warn!("Failed to save favorites: {}", e);
        }

        self.observers
            .retain(|observer| observer.send(change.clone()).is_ok());
        log::debug!("Favorites changed: {:?}", change);
    }
}

fn restore(storage: &dyn KeyValueStore) -> BTreeSet<String> {
    match storage.get(FAVORITES_KEY) {
        Ok(Some(bytes)) => decode_ids(&bytes).unwrap_or_else(|e| {
            log::warn!("Ignoring saved favorites: {}", e);
            BTreeSet::new()
        }),
        Ok(None) => BTreeSet::new(),
        Err(e) => {
            log::warn!("Could not read saved favorites: {}", e);
            BTreeSet::new()
        }
    }
}

/// Encode a set of ids as a JSON array in ascending order.
///
/// Equal sets always encode to identical bytes.
pub fn encode_ids(ids: &BTreeSet<String>) -> Result<Vec<u8>, StorageError> {
    serde_json::to_vec(ids).map_err(|e| StorageError::Encode {
        key: FAVORITES_KEY.to_string(),
        source: e,
    })
}

/// Decode a JSON array of ids. Element order and duplicates are irrelevant.
pub fn decode_ids(bytes: &[u8]) -> Result<BTreeSet<String>, StorageError> {
    serde_json::from_slice(bytes).map_err(|e| StorageError::Decode {
        key: FAVORITES_KEY.to_string(),
        source: e,
    })
}

/// What the favorite button does next for a resort.
///
/// Toggling is not a store primitive: the caller reads
/// [`FavoritesStore::contains`] to pick the action (and its label), then
/// applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
}

impl FavoriteAction {
    pub fn for_resort(store: &FavoritesStore, id: &str) -> Self {
        if store.contains(id) {
            Self::Remove
        } else {
            Self::Add
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add to Favorites",
            Self::Remove => "Remove from Favorites",
        }
    }

    /// Apply the action. Returns whether membership changed.
    pub fn apply(self, store: &FavoritesStore, id: &str) -> bool {
        match self {
            Self::Add => store.add(id),
            Self::Remove => store.remove(id),
        }
    }
}

#[cfg(test)]
#[path = "tests/favorites_tests.rs"]
mod tests;
