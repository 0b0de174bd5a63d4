//! File-based configuration source.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{ConfigSource, SourceError};
use crate::PathStore;

/// A TOML file merged into the store's existing contents.
///
/// Optional files that don't exist are skipped. Required files that don't
/// exist cause an error.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    /// An optional file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required: false,
        }
    }

    /// A file that must exist; loading fails with [`SourceError::FileNotFound`] otherwise.
    pub fn required(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required: true,
        }
    }

    /// An optional file at `relative` inside `directory`.
    ///
    /// The two parts are joined with exactly one `/`. An empty `directory`
    /// leaves `relative` as-is instead of producing the absolute `/relative`;
    /// a bare relative name stays relative to the working directory.
    pub fn in_directory(directory: &str, relative: &str) -> Self {
        Self::new(join_path(directory, relative))
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileSource {
    fn apply(&self, store: &mut PathStore) -> Result<(), SourceError> {
        if let Some(table) = load_config_file(&self.path, self.required)? {
            info!(path = %self.path.display(), keys = table.len(), "merging configuration file");
            store.merge_items(table);
        }
        Ok(())
    }
}

fn join_path(directory: &str, relative: &str) -> PathBuf {
    if directory.is_empty() {
        return PathBuf::from(relative);
    }

    PathBuf::from(format!(
        "{}/{}",
        directory.trim_end_matches('/'),
        relative.trim_start_matches('/')
    ))
}

/// Loads and parses a TOML config file.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
fn load_config_file(path: &Path, required: bool) -> Result<Option<toml::Table>, SourceError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let table = toml::from_str(&contents).map_err(|e| SourceError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Some(table))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(SourceError::FileNotFound(path.to_path_buf()))
            } else {
                debug!(path = %path.display(), "optional config file missing, skipping");
                Ok(None)
            }
        }
        Err(e) => Err(SourceError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};
    use toml::Value;

    #[test]
    fn test_file_merges_into_existing_items() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[db]\nport = 5432").unwrap();

        let mut store = PathStore::new();
        store.set("db.host", "localhost");
        FileSource::new(file.path()).apply(&mut store).unwrap();

        assert_eq!(store.get("db.host"), Ok(Some(&Value::from("localhost"))));
        assert_eq!(store.get("db.port"), Ok(Some(&Value::Integer(5432))));
    }

    #[test]
    fn test_file_appends_arrays() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "plugins = [\"audit\"]").unwrap();

        let mut store = PathStore::new();
        store.set("plugins", vec!["core"]);
        FileSource::new(file.path()).apply(&mut store).unwrap();

        assert_eq!(
            store.get("plugins").unwrap(),
            Some(&Value::from(vec!["core", "audit"]))
        );
    }

    #[test]
    fn test_file_in_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("app.toml"), "name = \"demo\"").unwrap();

        let directory = format!("{}/", dir.path().display());
        let source = FileSource::in_directory(&directory, "/app.toml");
        assert_eq!(source.path(), dir.path().join("app.toml"));

        let mut store = PathStore::new();
        source.apply(&mut store).unwrap();
        assert_eq!(store.get("name"), Ok(Some(&Value::from("demo"))));
    }

    #[test]
    fn test_join_path_normalizes_slashes() {
        assert_eq!(join_path("config//", "//app.toml"), PathBuf::from("config/app.toml"));
        assert_eq!(join_path("config", "app.toml"), PathBuf::from("config/app.toml"));
        assert_eq!(join_path("", "app.toml"), PathBuf::from("app.toml"));
    }

    #[test]
    fn test_optional_missing_is_noop() {
        let mut store = PathStore::new();
        store.set("key", "value");
        let before = store.clone();

        FileSource::new("/nonexistent/path/config.toml")
            .apply(&mut store)
            .unwrap();

        assert_eq!(store, before);
    }

    #[test]
    fn test_required_missing() {
        let result = FileSource::required("/nonexistent/path/config.toml").apply(&mut PathStore::new());
        assert!(matches!(result, Err(SourceError::FileNotFound(_))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "required TOML source '/nonexistent/path/config.toml' does not exist"
        );
    }

    #[test]
    fn test_in_directory_empty_directory_stays_relative() {
        let source = FileSource::in_directory("", "/app.toml");
        assert_eq!(source.path(), Path::new("/app.toml"));

        let source = FileSource::in_directory("", "app.toml");
        assert_eq!(source.path(), Path::new("app.toml"));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "key = ").unwrap();

        let result = FileSource::new(file.path()).apply(&mut PathStore::new());
        let err = result.unwrap_err();
        assert!(matches!(err, SourceError::ParseError { .. }));
        assert!(err.to_string().contains("is not a valid table, nothing was merged"));
    }
}
