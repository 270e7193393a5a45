//! Event persistence.
//!
//! Events live in a single keyed collection serialized as one JSON blob
//! under the well-known `"events"` key of an injected [`KeyValue`] backing.
//! The store owns identifier generation and (de)serialization; the model
//! and aggregator never touch persistence.
//!
//! The backing is synchronous and single-writer. Concurrent writers against
//! the same backing race last-writer-wins on the whole collection; callers
//! that care must serialize access themselves.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use uuid::Uuid;

use crate::error::{ChoseiError, ChoseiResult};
use crate::event::Event;

/// Well-known key of the serialized event collection.
pub const EVENTS_KEY: &str = "events";

/// Well-known key of the last-used time label. A bare string, used only as
/// a UI default and never validated.
pub const LAST_TIME_INPUT_KEY: &str = "lastTimeInput";

/// Generate a fresh event identifier.
///
/// 128-bit random UUID; generated once per event and never reused.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// The injected persistence collaborator: string keys, string values.
pub trait KeyValue {
    fn get(&self, key: &str) -> ChoseiResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> ChoseiResult<()>;
    fn remove(&mut self, key: &str) -> ChoseiResult<()>;
}

/// In-memory backing for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> ChoseiResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ChoseiResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> ChoseiResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-per-key backing rooted at a data directory.
///
/// Writes go through a temp file and rename so a crashed write never leaves
/// a half-written value behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValue for FileStore {
    fn get(&self, key: &str) -> ChoseiResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        std::fs::read_to_string(&path).map(Some).map_err(|e| {
            ChoseiError::Storage(format!("could not read {}: {e}", path.display()))
        })
    }

    fn set(&mut self, key: &str, value: &str) -> ChoseiResult<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| ChoseiError::Storage(format!("could not create data dir: {e}")))?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.tmp"));

        std::fs::write(&temp, value)
            .map_err(|e| ChoseiError::Storage(format!("could not write {}: {e}", temp.display())))?;
        std::fs::rename(&temp, &path)
            .map_err(|e| ChoseiError::Storage(format!("could not write {}: {e}", path.display())))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> ChoseiResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .map_err(|e| ChoseiError::Storage(format!("could not remove {}: {e}", path.display())))?;
        }
        Ok(())
    }
}

/// CRUD over the event collection, generic over the persistence backing.
pub struct EventStore<S: KeyValue> {
    backend: S,
}

impl<S: KeyValue> EventStore<S> {
    pub fn new(backend: S) -> Self {
        EventStore { backend }
    }

    /// Lenient collection read: a missing, unreadable or malformed blob
    /// reads as `None`. Used by the read paths, where damaged storage must
    /// surface as "nothing there" rather than a crash.
    fn collection(&self) -> Option<BTreeMap<String, Event>> {
        let raw = self.backend.get(EVENTS_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    /// Upsert an event and persist the whole collection.
    ///
    /// A present-but-unparseable blob aborts the save: the last
    /// successfully committed data must not be clobbered by a rebuilt
    /// collection that no longer contains it.
    pub fn save(&mut self, event: &Event) -> ChoseiResult<()> {
        let mut events: BTreeMap<String, Event> = match self.backend.get(EVENTS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|_| {
                ChoseiError::Storage(
                    "refusing to overwrite an unreadable event collection".into(),
                )
            })?,
            None => BTreeMap::new(),
        };

        events.insert(event.id.clone(), event.clone());

        let raw = serde_json::to_string(&events)
            .map_err(|e| ChoseiError::Serialization(e.to_string()))?;
        self.backend.set(EVENTS_KEY, &raw)
    }

    /// Load one event by identifier.
    ///
    /// An absent id, an absent or malformed collection and a failing
    /// backing read all surface as `EventNotFound`.
    pub fn load(&self, id: &str) -> ChoseiResult<Event> {
        self.collection()
            .and_then(|mut events| events.remove(id))
            .ok_or_else(|| ChoseiError::EventNotFound(id.to_string()))
    }

    /// All events in creation order (stable id tiebreak). An unreadable
    /// collection lists as empty.
    pub fn list(&self) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .collection()
            .map(|events| events.into_values().collect())
            .unwrap_or_default();

        events.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        events
    }

    /// Last-used time label, if one was remembered.
    pub fn last_time_label(&self) -> Option<String> {
        self.backend.get(LAST_TIME_INPUT_KEY).ok().flatten()
    }

    /// Remember the time label to use as the next default.
    pub fn remember_time_label(&mut self, label: &str) -> ChoseiResult<()> {
        self.backend.set(LAST_TIME_INPUT_KEY, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::AvailabilityMark::{Available, Maybe};
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    fn make_event(name: &str) -> Event {
        Event::new(
            name,
            None,
            vec![
                "2025/04/01 19:00～".to_string(),
                "2025/04/02 19:00～".to_string(),
            ],
        )
        .unwrap()
    }

    fn memory_store() -> EventStore<MemoryStore> {
        EventStore::new(MemoryStore::new())
    }

    // --- save / load ---

    #[test]
    fn save_then_load_round_trips() {
        let mut store = memory_store();
        let mut event = make_event("チーム会議");
        event
            .add_participant("Aさん", None, vec![Available, Maybe])
            .unwrap();

        store.save(&event).unwrap();
        let loaded = store.load(&event.id).unwrap();

        assert_eq!(loaded.name, "チーム会議");
        assert_eq!(loaded.dates, event.dates);
        assert_eq!(loaded.participants, event.participants);
    }

    #[test]
    fn save_upserts_by_id() {
        let mut store = memory_store();
        let mut event = make_event("チーム会議");
        store.save(&event).unwrap();

        event
            .add_participant("Bさん", None, vec![Available, Available])
            .unwrap();
        store.save(&event).unwrap();

        assert_eq!(store.list().len(), 1);
        assert_eq!(store.load(&event.id).unwrap().participants.len(), 1);
    }

    #[test]
    fn load_missing_id_is_not_found() {
        let store = memory_store();
        let result = store.load("no-such-id");
        assert!(matches!(result, Err(ChoseiError::EventNotFound(_))));
    }

    #[test]
    fn corrupt_collection_reads_as_not_found() {
        let mut backend = MemoryStore::new();
        backend.set(EVENTS_KEY, "{not json").unwrap();
        let store = EventStore::new(backend);

        assert!(matches!(
            store.load("anything"),
            Err(ChoseiError::EventNotFound(_))
        ));
        assert!(store.list().is_empty());
    }

    #[test]
    fn save_refuses_to_overwrite_corrupt_collection() {
        let mut backend = MemoryStore::new();
        backend.set(EVENTS_KEY, "{not json").unwrap();
        let mut store = EventStore::new(backend);

        let result = store.save(&make_event("チーム会議"));

        assert!(matches!(result, Err(ChoseiError::Storage(_))));
        assert_eq!(
            store.backend.get(EVENTS_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    // --- list ---

    #[test]
    fn list_orders_by_creation_time() {
        let mut store = memory_store();

        let mut older = make_event("先のイベント");
        older.created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut newer = make_event("後のイベント");
        newer.created_at = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

        store.save(&newer).unwrap();
        store.save(&older).unwrap();

        let names: Vec<String> = store.list().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["先のイベント", "後のイベント"]);
    }

    #[test]
    fn list_is_empty_for_a_fresh_store() {
        assert!(memory_store().list().is_empty());
    }

    // --- identifiers ---

    #[test]
    fn generated_ids_are_unique_across_ten_thousand_draws() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate_id()));
        }
    }

    // --- time label passthrough ---

    #[test]
    fn time_label_is_remembered() {
        let mut store = memory_store();
        assert_eq!(store.last_time_label(), None);

        store.remember_time_label("20:00～").unwrap();
        assert_eq!(store.last_time_label().as_deref(), Some("20:00～"));
    }

    // --- file backing ---

    #[test]
    fn file_store_round_trips_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileStore::new(dir.path());

        assert_eq!(backend.get("events").unwrap(), None);
        backend.set("events", "{}").unwrap();
        assert_eq!(backend.get("events").unwrap().as_deref(), Some("{}"));

        backend.remove("events").unwrap();
        assert_eq!(backend.get("events").unwrap(), None);
    }

    #[test]
    fn file_store_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileStore::new(dir.path());
        backend.set("lastTimeInput", "19:00～").unwrap();

        let entries: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["lastTimeInput"]);
    }

    #[test]
    fn event_store_works_over_the_file_backing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EventStore::new(FileStore::new(dir.path()));

        let event = make_event("チーム会議");
        store.save(&event).unwrap();

        // A second store over the same directory sees the committed data.
        let reread = EventStore::new(FileStore::new(dir.path()));
        assert_eq!(reread.load(&event.id).unwrap().name, "チーム会議");
    }
}
