//! Loading store contents from external sources.

mod error;
mod file;

use std::path::Path;

use toml::Table;

use crate::PathStore;

pub use error::SourceError;
pub use file::FileSource;

/// Something that populates a [`PathStore`].
///
/// Sources only touch the store through its bulk operations: replacement
/// or root-level merge.
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    fn apply(&self, store: &mut PathStore) -> Result<(), SourceError>;
}

/// A pre-built table that replaces the store's contents outright.
#[derive(Debug, Clone)]
pub struct ItemsSource(pub Table);

impl ConfigSource for ItemsSource {
    fn apply(&self, store: &mut PathStore) -> Result<(), SourceError> {
        store.set_items(self.0.clone());
        Ok(())
    }
}

/// Builder that applies sources to a store in registration order.
///
/// ## Example
///
/// ```no_run
/// use pathstore::SourceLoader;
///
/// let store = SourceLoader::new()
///     .with_required_file("config/default.toml")
///     .with_file_in("config", "local.toml")
///     .load()?;
///
/// let host = store.get("db.host")?;
/// # Ok::<(), pathstore::Error>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "loaders do nothing until .load() or .load_into() is called"]
pub struct SourceLoader {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl SourceLoader {
    /// Creates a loader with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever earlier sources produced with `items`.
    pub fn with_items(self, items: Table) -> Self {
        self.with_source(ItemsSource(items))
    }

    /// Merges an optional TOML file. A missing file is skipped.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(FileSource::new(path))
    }

    /// Merges a TOML file that must exist.
    pub fn with_required_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(FileSource::required(path))
    }

    /// Merges the optional file `relative` found under `directory`.
    pub fn with_file_in(self, directory: &str, relative: &str) -> Self {
        self.with_source(FileSource::in_directory(directory, relative))
    }

    /// Adds any [`ConfigSource`].
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Applies every source to `store`, stopping at the first failure.
    pub fn load_into(self, store: &mut PathStore) -> Result<(), SourceError> {
        for source in self.sources {
            source.apply(store)?;
        }
        Ok(())
    }

    /// Applies every source to a fresh, empty store.
    pub fn load(self) -> Result<PathStore, SourceError> {
        let mut store = PathStore::new();
        self.load_into(&mut store)?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use toml::Value;

    fn make_table(toml_str: &str) -> Table {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_items_source_replaces() {
        let mut store = PathStore::new();
        store.set("old", "value");

        let items = make_table(r#"key1 = "value1""#);
        ItemsSource(items.clone()).apply(&mut store).unwrap();

        assert_eq!(store.items(), &items);
    }

    #[test]
    fn test_sources_apply_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[db]\nhost = \"db.internal\"\nport = 5432").unwrap();

        let store = SourceLoader::new()
            .with_items(make_table(
                r#"
                name = "app"
                [db]
                host = "localhost"
                "#,
            ))
            .with_file(file.path())
            .with_file("/nonexistent/path/local.toml")
            .load()
            .unwrap();

        assert_eq!(store.get("name"), Ok(Some(&Value::from("app"))));
        assert_eq!(store.get("db.host"), Ok(Some(&Value::from("db.internal"))));
        assert_eq!(store.get("db.port"), Ok(Some(&Value::Integer(5432))));
    }

    #[test]
    fn test_items_after_file_discards_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "from_file = true").unwrap();

        let store = SourceLoader::new()
            .with_file(file.path())
            .with_items(make_table("from_items = true"))
            .load()
            .unwrap();

        assert!(!store.contains("from_file", crate::Mode::Resolved));
        assert!(store.contains("from_items", crate::Mode::Resolved));
    }

    #[test]
    fn test_load_into_keeps_store_mode() {
        let mut store = PathStore::new();
        store.set_mode(crate::Mode::Literal);

        SourceLoader::new()
            .with_items(make_table(r#"key = "value""#))
            .load_into(&mut store)
            .unwrap();

        assert!(store.is_literal());
        assert_eq!(store.get("key"), Ok(Some(&Value::from("value"))));
    }

    #[test]
    fn test_required_file_failure_stops_loading() {
        let result = SourceLoader::new()
            .with_required_file("/nonexistent/path/default.toml")
            .load();

        assert!(matches!(result, Err(SourceError::FileNotFound(_))));
    }
}
