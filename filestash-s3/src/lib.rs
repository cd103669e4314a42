//! S3 binding for the Filestash storage abstraction
//!
//! This crate implements the `FileStorage` contract on top of an injected
//! S3-compatible client. The adapter itself is thin: it resolves object
//! keys, hands opaque byte buffers to the client, and rebuilds files from
//! the client's responses. Signing, endpoint resolution, and retries all
//! belong to the client.

pub mod client;
pub mod storage;

pub use client::{
    GetResponse, MemoryClient, PutResponse, S3Client, S3ClientError, S3Config, SdkClient,
    UploadRequest,
};
pub use storage::S3Storage;
