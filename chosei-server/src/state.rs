use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use chosei_core::config::ChoseiConfig;
use chosei_core::store::{EventStore, FileStore};

/// Shared application state.
///
/// The event store is synchronous and single-writer; one mutex serializes
/// every request against it.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<EventStore<FileStore>>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = ChoseiConfig::load()?;
        let store = EventStore::new(FileStore::new(config.data_path()));

        Ok(AppState {
            store: Arc::new(Mutex::new(store)),
        })
    }

    pub fn store(&self) -> MutexGuard<'_, EventStore<FileStore>> {
        self.store.lock().expect("event store mutex poisoned")
    }
}
