use crate::source::SourceError;
use crate::store::StoreError;
use thiserror::Error;

/// Top-level error type for the pathstore library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("source error: {0}")]
    Source(#[from] SourceError),
}
