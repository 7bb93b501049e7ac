use super::*;
use crate::storage::MemoryStore;

fn drain(rx: &Receiver<FavoritesChange>) -> Vec<FavoritesChange> {
    rx.try_iter().collect()
}

#[test]
fn starts_empty_without_saved_data() {
    let store = FavoritesStore::open(MemoryStore::new());
    assert!(store.is_empty());
    assert!(!store.contains("ch1"));
}

#[test]
fn add_then_remove() {
    let store = FavoritesStore::open(MemoryStore::new());
    assert!(store.add("ch1"));
    assert!(store.contains("ch1"));
    assert!(store.remove("ch1"));
    assert!(!store.contains("ch1"));
}

#[test]
fn add_is_idempotent_including_persisted_bytes() {
    let disk = MemoryStore::new();
    let store = FavoritesStore::open(disk.clone());

    assert!(store.add("fr1"));
    let once = disk.raw(FAVORITES_KEY).unwrap();
    assert!(!store.add("fr1"));
    let twice = disk.raw(FAVORITES_KEY).unwrap();

    assert_eq!(store.ids(), vec!["fr1"]);
    assert_eq!(once, twice);
}

#[test]
fn remove_is_idempotent() {
    let disk = MemoryStore::new();
    let store = FavoritesStore::open(disk.clone());
    store.add("fr1");
    store.add("ch1");

    assert!(store.remove("fr1"));
    let once = disk.raw(FAVORITES_KEY).unwrap();
    assert!(!store.remove("fr1"));
    assert_eq!(disk.raw(FAVORITES_KEY).unwrap(), once);
    assert_eq!(store.ids(), vec!["ch1"]);
}

#[test]
fn removing_an_absent_id_writes_nothing() {
    let disk = MemoryStore::new();
    let store = FavoritesStore::open(disk.clone());
    assert!(!store.remove("never-added"));
    assert!(disk.raw(FAVORITES_KEY).is_none());
}

#[test]
fn every_change_is_persisted_before_returning() {
    let disk = MemoryStore::new();
    let store = FavoritesStore::open(disk.clone());

    store.add("ch1");
    let saved = decode_ids(&disk.raw(FAVORITES_KEY).unwrap()).unwrap();
    assert!(saved.contains("ch1"));

    store.remove("ch1");
    let saved = decode_ids(&disk.raw(FAVORITES_KEY).unwrap()).unwrap();
    assert!(saved.is_empty());
}

#[test]
fn one_notification_per_observer_per_change() {
    let store = FavoritesStore::open(MemoryStore::new());
    let a = store.subscribe();
    let b = store.subscribe();

    store.add("fr1");
    store.add("fr1");
    store.remove("ch1");
    store.remove("fr1");

    let expected = vec![
        FavoritesChange::Added("fr1".into()),
        FavoritesChange::Removed("fr1".into()),
    ];
    assert_eq!(drain(&a), expected);
    assert_eq!(drain(&b), expected);
}

#[test]
fn no_op_mutations_do_not_notify() {
    let store = FavoritesStore::open(MemoryStore::new());
    store.add("fr1");
    let rx = store.subscribe();

    store.add("fr1");
    store.remove("zz9");

    assert!(drain(&rx).is_empty());
}

#[test]
fn observers_read_the_new_state() {
    let store = FavoritesStore::open(MemoryStore::new());
    let rx = store.subscribe();

    store.add("ch1");
    let change = rx.try_recv().unwrap();
    assert_eq!(change.id(), "ch1");
    assert!(store.contains(change.id()));
}

#[test]
fn dropped_observers_are_pruned() {
    let store = FavoritesStore::open(MemoryStore::new());
    let kept = store.subscribe();
    drop(store.subscribe());

    store.add("fr1");
    assert_eq!(store.lock().observers.len(), 1);
    assert_eq!(drain(&kept).len(), 1);
}

#[test]
fn reopening_restores_the_set() {
    let disk = MemoryStore::new();
    {
        let store = FavoritesStore::open(disk.clone());
        store.add("fr1");
        store.add("ch1");
    }
    let store = FavoritesStore::open(disk);
    assert!(store.contains("fr1"));
    assert!(store.contains("ch1"));
    assert_eq!(store.len(), 2);
}

#[test]
fn corrupt_saved_data_falls_back_to_empty() {
    let mut disk = MemoryStore::new();
    disk.set(FAVORITES_KEY, b"{not json").unwrap();

    let store = FavoritesStore::open(disk.clone());
    assert!(store.is_empty());

    // The next change overwrites the corrupt value.
    store.add("fr1");
    let saved = decode_ids(&disk.raw(FAVORITES_KEY).unwrap()).unwrap();
    assert_eq!(saved.len(), 1);
}

#[test]
fn wrong_shape_is_treated_as_corrupt() {
    let mut disk = MemoryStore::new();
    disk.set(FAVORITES_KEY, br#"{"ids": ["fr1"]}"#).unwrap();
    assert!(FavoritesStore::open(disk).is_empty());
}

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Err(StorageError::io(
            "failing",
            std::io::Error::other("disk on fire"),
        ))
    }

    fn set(&mut self, _key: &str, _value: &[u8]) -> Result<(), StorageError> {
        Err(StorageError::io(
            "failing",
            std::io::Error::other("disk on fire"),
        ))
    }
}

#[test]
fn storage_failures_never_reach_the_caller() {
    let store = FavoritesStore::open(FailingStore);
    let rx = store.subscribe();
    assert!(store.is_empty());

    assert!(store.add("fr1"));
    assert!(store.contains("fr1"));
    assert_eq!(drain(&rx), vec![FavoritesChange::Added("fr1".into())]);
}

/// Memory-backed storage whose writes can be switched off.
#[derive(Clone, Default)]
struct SwitchableStore {
    disk: MemoryStore,
    failing: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

impl SwitchableStore {
    fn set_failing(&self, failing: bool) {
        self.failing
            .store(failing, std::sync::atomic::Ordering::SeqCst);
    }
}

impl KeyValueStore for SwitchableStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.disk.get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        if self.failing.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(StorageError::io(
                "switchable",
                std::io::Error::other("write refused"),
            ));
        }
        self.disk.set(key, value)
    }
}

#[test]
fn failed_write_keeps_change_in_memory_until_next_save() {
    let storage = SwitchableStore::default();
    let store = FavoritesStore::open(storage.clone());
    let rx = store.subscribe();

    assert!(store.add("fr1"));

    storage.set_failing(true);
    assert!(store.add("ch1"));
    assert!(store.contains("ch1"));
    assert_eq!(
        drain(&rx),
        vec![
            FavoritesChange::Added("fr1".into()),
            FavoritesChange::Added("ch1".into()),
        ]
    );

    // A restart now only sees what reached the disk.
    let restarted = FavoritesStore::open(storage.disk.clone());
    assert_eq!(restarted.ids(), vec!["fr1".to_string()]);

    // The next successful write carries the unsaved change along.
    storage.set_failing(false);
    assert!(store.add("ca1"));
    let restarted = FavoritesStore::open(storage.disk.clone());
    assert_eq!(
        restarted.ids(),
        vec!["ca1".to_string(), "ch1".to_string(), "fr1".to_string()]
    );
}

#[test]
fn encoding_is_order_independent() {
    let forward: BTreeSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let backward: BTreeSet<String> = ["c", "b", "a"].iter().map(|s| s.to_string()).collect();
    assert_eq!(encode_ids(&forward).unwrap(), encode_ids(&backward).unwrap());
    assert_eq!(decode_ids(&encode_ids(&forward).unwrap()).unwrap(), forward);
}

#[test]
fn decoding_ignores_order_and_duplicates() {
    let decoded = decode_ids(br#"["zermatt", "chamonix", "zermatt"]"#).unwrap();
    let expected: BTreeSet<String> = ["chamonix", "zermatt"].iter().map(|s| s.to_string()).collect();
    assert_eq!(decoded, expected);
}

#[test]
fn favorite_action_follows_membership() {
    let store = FavoritesStore::open(MemoryStore::new());

    let action = FavoriteAction::for_resort(&store, "ch1");
    assert_eq!(action, FavoriteAction::Add);
    assert_eq!(action.label(), "Add to Favorites");
    assert!(action.apply(&store, "ch1"));

    let action = FavoriteAction::for_resort(&store, "ch1");
    assert_eq!(action, FavoriteAction::Remove);
    assert_eq!(action.label(), "Remove from Favorites");
    assert!(action.apply(&store, "ch1"));
    assert!(!store.contains("ch1"));
}

#[test]
fn concurrent_mutations_are_serialized() {
    use std::sync::Arc;

    let disk = MemoryStore::new();
    let store = Arc::new(FavoritesStore::open(disk.clone()));
    let rx = store.subscribe();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..25 {
                    store.add(&format!("r{}-{}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 200);
    assert_eq!(drain(&rx).len(), 200);
    let saved = decode_ids(&disk.raw(FAVORITES_KEY).unwrap()).unwrap();
    assert_eq!(saved.len(), 200);
}
