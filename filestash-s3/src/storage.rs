//! S3 implementation of the `FileStorage` contract

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use filestash_core::{path, FileStorage, StorageResult, StoredFile};

use crate::client::{S3Client, UploadRequest};

/// Content type recorded when a stored file carries none
const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// S3 binding for the `FileStorage` contract.
///
/// Translates the four storage operations into calls on an injected
/// `S3Client`, resolving destination keys and extracting file names from
/// response paths. Holds no state beyond its configuration and the client
/// reference; every call builds fresh request values.
///
/// When storing, an explicit path wins over the configured default path;
/// with neither, the file's own name is the full destination key. The path
/// is always treated as a directory prefix and joined with the file name.
pub struct S3Storage {
    client: Arc<dyn S3Client>,
    default_path: Option<String>,
}

impl S3Storage {
    pub fn new(client: Arc<dyn S3Client>) -> Self {
        Self {
            client,
            default_path: None,
        }
    }

    /// Directory prefix used when `store` receives no explicit path
    pub fn with_default_path(mut self, path: impl Into<String>) -> Self {
        self.default_path = Some(path.into());
        self
    }

    /// Fully qualified retrieval URL for the object at `path`
    pub fn url(&self, path: &str) -> StorageResult<String> {
        Ok(self.client.object_url(path)?)
    }

    fn destination(&self, filename: &str, path: Option<&str>) -> String {
        match path.or(self.default_path.as_deref()) {
            Some(prefix) if !prefix.is_empty() => path::join(prefix, filename),
            _ => filename.to_string(),
        }
    }
}

#[async_trait]
impl FileStorage for S3Storage {
    async fn store(&self, file: StoredFile, path: Option<&str>) -> StorageResult<String> {
        let destination = self.destination(&file.filename, path);
        let content_type = file
            .content_type
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        debug!(destination = %destination, "storing file");

        let response = self
            .client
            .put(UploadRequest {
                data: file.data,
                destination,
                content_type,
            })
            .await?;

        Ok(response.path)
    }

    async fn fetch(&self, path: &str) -> StorageResult<StoredFile> {
        let response = self.client.get(path).await?;
        let name = path::file_name(&response.path)?;

        let file = StoredFile {
            filename: name.to_string(),
            data: response.data,
            content_type: response.content_type,
        };
        Ok(file)
    }

    async fn write(&self, path: &str, data: Bytes) -> StorageResult<StoredFile> {
        // S3 has no in-place mutation: delete, then store fresh content
        // under the same prefix. A delete failure aborts before the store;
        // a store failure after it leaves the object deleted.
        let (prefix, name) = path::split(path)?;

        debug!(path = %path, "replacing file");

        self.client.delete(path).await?;

        let file = StoredFile::new(name, data);
        self.store(file.clone(), Some(prefix)).await?;
        Ok(file)
    }

    async fn delete(&self, path: &str) -> StorageResult<()> {
        self.client.delete(path).await?;
        Ok(())
    }
}
