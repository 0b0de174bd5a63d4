use std::sync::Arc;

use parking_lot::Mutex;
use toml::{Table, Value};

use super::{Mode, PathStore, StoreError};

/// A [`PathStore`] behind a single lock, for hosts with concurrent callers.
///
/// Every call holds the lock for its whole duration, so a read-then-write such
/// as [`merge`](Self::merge) is never interleaved with another caller. Values
/// come back owned. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<PathStore>>,
}

impl SharedStore {
    /// Wraps `store` for shared use.
    pub fn new(store: PathStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut PathStore) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Replaces the whole backing table. See [`PathStore::set_items`].
    pub fn set_items(&self, items: Table) {
        self.inner.lock().set_items(items);
    }

    /// Returns an owned copy of the backing table.
    pub fn snapshot(&self) -> Table {
        self.inner.lock().snapshot()
    }

    /// The store's own mode.
    pub fn mode(&self) -> Mode {
        self.inner.lock().mode()
    }

    /// Sets the store's own mode.
    pub fn set_mode(&self, mode: Mode) {
        self.inner.lock().set_mode(mode);
    }

    /// Owned result of [`PathStore::exists_or`].
    pub fn exists_or(&self, path: &str, fallback: impl Into<Value>, mode: Mode) -> Value {
        self.inner.lock().exists_or(path, fallback, mode)
    }

    /// Owned result of [`PathStore::item`].
    pub fn item(&self, path: &str, mode: Mode) -> Result<Option<Value>, StoreError> {
        self.inner.lock().item(path, mode).map(|v| v.cloned())
    }

    /// Writes then reads back under one lock. See [`PathStore::set_item`].
    pub fn set_item(
        &self,
        path: &str,
        value: impl Into<Value>,
        mode: Mode,
    ) -> Result<Option<Value>, StoreError> {
        self.inner
            .lock()
            .set_item(path, value, mode)
            .map(|v| v.cloned())
    }

    /// Merges then reads back under one lock. See [`PathStore::merge`].
    pub fn merge(&self, path: &str, value: Table, mode: Mode) -> Result<Option<Value>, StoreError> {
        self.inner.lock().merge(path, value, mode).map(|v| v.cloned())
    }
}

impl From<PathStore> for SharedStore {
    fn from(store: PathStore) -> Self {
        Self::new(store)
    }
}
