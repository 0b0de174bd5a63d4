use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("config key '{0}' does not exist")]
    KeyNotFound(String),
}
