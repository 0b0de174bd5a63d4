use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("required TOML source '{0}' does not exist")]
    FileNotFound(PathBuf),

    #[error("could not read TOML source '{path}' for merging: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML source '{path}' is not a valid table, nothing was merged: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}
