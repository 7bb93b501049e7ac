use thiserror::Error;

/// Errors from the durable key-value storage behind the favorites store.
///
/// These never reach callers of [`FavoritesStore`](crate::FavoritesStore);
/// the store logs them and falls back.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error reading or writing a key
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The stored value could not be decoded
    #[error("Corrupt value for key '{key}': {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },

    /// The value could not be encoded
    #[error("Failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },

    /// Key contains characters that cannot be used as a file name
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
