//! Persistence boundary: a synchronous key-value store holding serialized
//! blobs.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Keys used in the key-value store.
pub mod keys {
    /// Serialized workout list.
    pub const WORKOUTS: &str = "workouts";
}

/// Synchronous get/set of whole blobs by key.
pub trait KeyValueStore {
    /// Read the blob stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the blob stored under `key`.
    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// Errors from a key-value backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}
