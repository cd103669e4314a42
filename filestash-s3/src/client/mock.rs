//! In-memory mock client
//!
//! A test double for the `S3Client` collaborator. Mirrors the observable
//! behavior of S3 closely enough for adapter tests: puts overwrite, gets of
//! absent keys fail with not-found, deletes of absent keys succeed.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use md5::{Digest, Md5};

use super::traits::{GetResponse, PutResponse, S3Client, S3ClientError, UploadRequest};

/// Object held by the mock
struct MockObject {
    data: Bytes,
    content_type: String,
    etag: String,
}

/// In-memory S3 client double
pub struct MemoryClient {
    bucket: String,
    objects: DashMap<String, MockObject>,
    fail_puts: AtomicBool,
    fail_deletes: AtomicBool,
}

impl Default for MemoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryClient {
    pub fn new() -> Self {
        Self {
            bucket: "mock-bucket".to_string(),
            objects: DashMap::new(),
            fail_puts: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
        }
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Make subsequent puts fail with a request error
    pub fn fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent deletes fail with a request error
    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// ETag recorded for `key`, if stored
    pub fn etag(&self, key: &str) -> Option<String> {
        self.objects.get(key).map(|obj| obj.etag.clone())
    }

    /// Content type recorded for `key`, if stored
    pub fn content_type(&self, key: &str) -> Option<String> {
        self.objects.get(key).map(|obj| obj.content_type.clone())
    }

    fn compute_etag(data: &[u8]) -> String {
        let mut hasher = Md5::new();
        hasher.update(data);
        format!("\"{}\"", hex::encode(hasher.finalize()))
    }
}

#[async_trait]
impl S3Client for MemoryClient {
    async fn put(&self, upload: UploadRequest) -> Result<PutResponse, S3ClientError> {
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(S3ClientError::Request("injected put failure".to_string()));
        }

        let etag = Self::compute_etag(&upload.data);
        self.objects.insert(
            upload.destination.clone(),
            MockObject {
                data: upload.data,
                content_type: upload.content_type,
                etag,
            },
        );

        Ok(PutResponse {
            path: upload.destination,
        })
    }

    async fn get(&self, key: &str) -> Result<GetResponse, S3ClientError> {
        let obj = self
            .objects
            .get(key)
            .ok_or_else(|| S3ClientError::NotFound(key.to_string()))?;

        Ok(GetResponse {
            path: key.to_string(),
            data: obj.data.clone(),
            content_type: Some(obj.content_type.clone()),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), S3ClientError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(S3ClientError::Request("injected delete failure".to_string()));
        }

        // S3 deletes succeed even when the key is absent
        self.objects.remove(key);
        Ok(())
    }

    fn object_url(&self, key: &str) -> Result<String, S3ClientError> {
        Ok(format!(
            "https://{}.s3.us-east-1.amazonaws.com/{}",
            self.bucket, key
        ))
    }
}
