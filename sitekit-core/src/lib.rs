pub mod persistence;

pub use persistence::{KeyValueStore, StorageError};
