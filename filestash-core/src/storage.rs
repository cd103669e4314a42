//! Abstract file storage contract

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::StorageResult;
use crate::file::StoredFile;

/// Contract implemented by every storage binding.
///
/// Implementations are stateless per call: each operation issues its own
/// backend requests and holds no session state between invocations.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Store a file, optionally under an explicit directory path.
    ///
    /// Returns the object key the file was stored at.
    async fn store(&self, file: StoredFile, path: Option<&str>) -> StorageResult<String>;

    /// Fetch the file stored at `path`.
    async fn fetch(&self, path: &str) -> StorageResult<StoredFile>;

    /// Replace the content of the file at `path`, returning the new file.
    async fn write(&self, path: &str, data: Bytes) -> StorageResult<StoredFile>;

    /// Delete the file at `path`.
    async fn delete(&self, path: &str) -> StorageResult<()>;
}
