//! S3 client collaborators

mod mock;
mod sdk;
mod traits;

#[cfg(test)]
mod tests;

pub use mock::MemoryClient;
pub use sdk::{S3Config, SdkClient};
pub use traits::{GetResponse, PutResponse, S3Client, S3ClientError, UploadRequest};
