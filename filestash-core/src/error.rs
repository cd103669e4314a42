//! Storage error types

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors from storage operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Invalid path: no file name in `{0}`")]
    InvalidPath(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StorageError::InvalidPath("docs/".to_string());
        assert_eq!(err.to_string(), "Invalid path: no file name in `docs/`");

        let err = StorageError::NotFound("docs/readme.md".to_string());
        assert_eq!(err.to_string(), "Object not found: docs/readme.md");
    }
}
