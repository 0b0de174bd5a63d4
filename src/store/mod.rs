//! The path-addressed store.

mod error;
mod merge;
mod path;
mod shared;

use serde::{Deserialize, Serialize};
use toml::{Table, Value};
use tracing::debug;

pub use error::StoreError;
pub use merge::deep_merge;
pub use path::{assign, find, find_strict};
pub use shared::SharedStore;

/// How a path string addresses the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Split on `.` and descend through nested tables.
    #[default]
    Resolved,
    /// Use the whole string as a single top-level key.
    Literal,
}

/// An in-memory tree of configuration values addressed by dotted paths.
///
/// ```
/// use pathstore::{Mode, PathStore};
///
/// let mut store = PathStore::new();
/// store.put("db.host", "localhost", Mode::Resolved);
///
/// assert_eq!(
///     store.item("db.host", Mode::Resolved)?.and_then(|v| v.as_str()),
///     Some("localhost")
/// );
/// assert!(store.item("db.host", Mode::Literal).is_err());
/// # Ok::<(), pathstore::StoreError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathStore {
    items: Table,
    mode: Mode,
}

impl PathStore {
    /// Creates an empty store in resolved mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store in resolved mode holding `items`.
    pub fn with_items(items: Table) -> Self {
        Self {
            items,
            mode: Mode::default(),
        }
    }

    /// Replaces the whole backing table.
    pub fn set_items(&mut self, items: Table) -> &mut Self {
        debug!(keys = items.len(), "replacing store contents");
        self.items = items;
        self
    }

    /// Borrows the live backing table.
    pub fn items(&self) -> &Table {
        &self.items
    }

    /// Returns an owned copy of the backing table.
    pub fn snapshot(&self) -> Table {
        self.items.clone()
    }

    /// Consumes the store, returning its backing table.
    pub fn into_items(self) -> Table {
        self.items
    }

    /// Sets the mode used by [`get`](Self::get) and [`set`](Self::set).
    pub fn set_mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// The mode used by [`get`](Self::get) and [`set`](Self::set).
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the store's own mode is [`Mode::Literal`].
    pub fn is_literal(&self) -> bool {
        self.mode == Mode::Literal
    }

    /// Looks `path` up without ever failing.
    ///
    /// In resolved mode the dotted path is tried first, then the whole string
    /// as a flat top-level key. Literal mode only tries the flat key.
    pub fn exists(&self, path: &str, mode: Mode) -> Option<&Value> {
        let resolved = match mode {
            Mode::Resolved => find(path, &self.items),
            Mode::Literal => None,
        };

        resolved.or_else(|| self.items.get(path))
    }

    /// Like [`exists`](Self::exists), returning `fallback` when nothing is found.
    pub fn exists_or(&self, path: &str, fallback: impl Into<Value>, mode: Mode) -> Value {
        match self.exists(path, mode) {
            Some(value) => value.clone(),
            None => fallback.into(),
        }
    }

    /// Whether [`exists`](Self::exists) finds anything at `path`.
    pub fn contains(&self, path: &str, mode: Mode) -> bool {
        self.exists(path, mode).is_some()
    }

    /// Reads the value at `path`.
    ///
    /// A missing resolved path yields `Ok(None)`. A missing literal key is an
    /// error.
    pub fn item(&self, path: &str, mode: Mode) -> Result<Option<&Value>, StoreError> {
        match mode {
            Mode::Resolved => Ok(find(path, &self.items)),
            Mode::Literal => self
                .items
                .get(path)
                .map(Some)
                .ok_or_else(|| StoreError::KeyNotFound(path.to_string())),
        }
    }

    /// Writes `value` at `path`. Resolved writes create intermediate tables.
    pub fn put(&mut self, path: &str, value: impl Into<Value>, mode: Mode) -> &mut Self {
        let value = value.into();
        match mode {
            Mode::Resolved => assign(path, &mut self.items, value),
            Mode::Literal => {
                self.items.insert(path.to_string(), value);
            }
        }
        self
    }

    /// Writes `value` at `path`, then reads it back as [`item`](Self::item) does.
    pub fn set_item(
        &mut self,
        path: &str,
        value: impl Into<Value>,
        mode: Mode,
    ) -> Result<Option<&Value>, StoreError> {
        self.put(path, value, mode);
        self.item(path, mode)
    }

    /// Reads `path` using the store's own mode.
    pub fn get(&self, path: &str) -> Result<Option<&Value>, StoreError> {
        self.item(path, self.mode)
    }

    /// Writes `path` using the store's own mode.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &mut Self {
        let mode = self.mode;
        self.put(path, value, mode)
    }

    /// Deep-merges `value` into the top-level key `path`, then reads back.
    ///
    /// The write always targets `path` as a literal key, even in resolved
    /// mode; `mode` only affects the read-back. A missing or non-table target
    /// is replaced by `value`.
    pub fn merge(
        &mut self,
        path: &str,
        value: Table,
        mode: Mode,
    ) -> Result<Option<&Value>, StoreError> {
        match self.items.get_mut(path) {
            Some(Value::Table(existing)) => deep_merge(existing, value),
            Some(_) => {
                debug!(key = path, "merge target is not a table, replacing it");
                self.items.insert(path.to_string(), Value::Table(value));
            }
            None => {
                self.items.insert(path.to_string(), Value::Table(value));
            }
        }

        self.item(path, mode)
    }

    /// Deep-merges `overlay` into the root table.
    pub fn merge_items(&mut self, overlay: Table) -> &mut Self {
        deep_merge(&mut self.items, overlay);
        self
    }
}

impl From<Table> for PathStore {
    fn from(items: Table) -> Self {
        Self::with_items(items)
    }
}
