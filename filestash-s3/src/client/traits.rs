//! S3 client trait and request/response types

use async_trait::async_trait;
use bytes::Bytes;
use filestash_core::StorageError;
use thiserror::Error;

/// Errors from S3 client operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum S3ClientError {
    #[error("No such key: {0}")]
    NotFound(String),

    #[error("Invalid client configuration: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Request(String),
}

impl From<S3ClientError> for StorageError {
    fn from(err: S3ClientError) -> Self {
        match err {
            S3ClientError::NotFound(key) => StorageError::NotFound(key),
            S3ClientError::Config(message) => StorageError::Config(message),
            S3ClientError::Request(message) => StorageError::Backend(message),
        }
    }
}

/// Upload descriptor sent to the client on store
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Raw content
    pub data: Bytes,

    /// Full destination object key
    pub destination: String,

    /// MIME type recorded with the object
    pub content_type: String,
}

/// Result of a put
#[derive(Debug, Clone)]
pub struct PutResponse {
    /// Object key the backend stored the upload at
    pub path: String,
}

/// Result of a get
#[derive(Debug, Clone)]
pub struct GetResponse {
    /// Object key the content was read from
    pub path: String,

    /// Raw content, trusted verbatim
    pub data: Bytes,

    /// MIME type recorded with the object, when the backend reports one
    pub content_type: Option<String>,
}

/// S3-compatible client capability.
///
/// The wire-level concerns (request signing, region endpoints, retries)
/// live behind this trait; `filestash` never implements them itself.
#[async_trait]
pub trait S3Client: Send + Sync {
    /// Upload the described content
    async fn put(&self, upload: UploadRequest) -> Result<PutResponse, S3ClientError>;

    /// Read the object at `key`
    async fn get(&self, key: &str) -> Result<GetResponse, S3ClientError>;

    /// Delete the object at `key`
    async fn delete(&self, key: &str) -> Result<(), S3ClientError>;

    /// Fully qualified retrieval URL for the object at `key`
    fn object_url(&self, key: &str) -> Result<String, S3ClientError>;
}
