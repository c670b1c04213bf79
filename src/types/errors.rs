use std::fmt;
use std::path::PathBuf;

// === StoreError ===

/// Errors raised by the bookmark store and its resolution pipeline.
#[derive(Debug)]
pub enum StoreError {
    /// The snapshot file does not exist or is not readable.
    SourceNotFound(PathBuf),
    /// Database operation failed.
    DatabaseError(String),
    /// The parent chain of a node is corrupt (cycle or excessive depth).
    DataIntegrity(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::SourceNotFound(path) => {
                write!(f, "Bookmark source not found: {}", path.display())
            }
            StoreError::DatabaseError(msg) => write!(f, "Bookmark database error: {}", msg),
            StoreError::DataIntegrity(msg) => write!(f, "Bookmark data integrity error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::DatabaseError(err.to_string())
    }
}
