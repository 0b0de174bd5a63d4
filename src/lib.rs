pub mod source;
pub mod store;
mod error;

pub use error::Error;
pub use source::{ConfigSource, SourceError, SourceLoader};
pub use store::{Mode, PathStore, SharedStore, StoreError};
