use std::sync::{Arc, Mutex};

use crate::store::Store;

/// Shared handler state. One lock around the whole store: each request's
/// core logic runs to completion under it, so there is exactly one logical
/// writer at a time. The lock is never held across an await point.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn with_store<T>(&self, f: impl FnOnce(&mut Store) -> T) -> T {
        let mut store = self.store.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut store)
    }
}
