//! AWS SDK backed client

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use serde::Deserialize;
use url::Url;

use super::traits::{GetResponse, PutResponse, S3Client, S3ClientError, UploadRequest};

fn default_region() -> String {
    "us-east-1".to_string()
}

/// Configuration for the SDK-backed client
#[derive(Debug, Clone, Deserialize)]
pub struct S3Config {
    /// Bucket every operation targets
    pub bucket: String,

    #[serde(default = "default_region")]
    pub region: String,

    /// Custom endpoint for S3-compatible services (MinIO, LocalStack).
    /// Forces path-style addressing when set.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl S3Config {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: default_region(),
            endpoint: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// Production S3 client backed by `aws-sdk-s3`.
///
/// Request signing, retries, and endpoint resolution are the SDK's job;
/// this type only shapes requests and responses for the `S3Client` trait.
pub struct SdkClient {
    client: Client,
    config: S3Config,
}

impl SdkClient {
    /// Create a client from explicit configuration.
    ///
    /// Credentials come from the standard AWS environment (environment
    /// variables, profile, instance metadata).
    pub async fn new(config: S3Config) -> Result<Self, S3ClientError> {
        if config.bucket.is_empty() {
            return Err(S3ClientError::Config("bucket name is empty".to_string()));
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint.clone());
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if config.endpoint.is_some() {
            builder = builder.force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            config,
        })
    }

    /// Create a client from the environment.
    ///
    /// Reads `S3_BUCKET`, and optionally `AWS_REGION` and
    /// `AWS_ENDPOINT_URL`. A missing bucket is a configuration error, not
    /// a panic.
    pub async fn from_env() -> Result<Self, S3ClientError> {
        let bucket = std::env::var("S3_BUCKET")
            .map_err(|_| S3ClientError::Config("S3_BUCKET is not set".to_string()))?;
        let region = std::env::var("AWS_REGION").unwrap_or_else(|_| default_region());
        let endpoint = std::env::var("AWS_ENDPOINT_URL").ok();

        Self::new(S3Config {
            bucket,
            region,
            endpoint,
        })
        .await
    }

    pub fn config(&self) -> &S3Config {
        &self.config
    }
}

#[async_trait]
impl S3Client for SdkClient {
    async fn put(&self, upload: UploadRequest) -> Result<PutResponse, S3ClientError> {
        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(&upload.destination)
            .content_type(&upload.content_type)
            .body(ByteStream::from(upload.data))
            .send()
            .await
            .map_err(|e| S3ClientError::Request(e.to_string()))?;

        Ok(PutResponse {
            path: upload.destination,
        })
    }

    async fn get(&self, key: &str) -> Result<GetResponse, S3ClientError> {
        let response = self
            .client
            .get_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(GetObjectError::is_no_such_key) {
                    S3ClientError::NotFound(key.to_string())
                } else {
                    S3ClientError::Request(e.to_string())
                }
            })?;

        let content_type = response.content_type().map(str::to_string);
        let data = response
            .body
            .collect()
            .await
            .map_err(|e| S3ClientError::Request(e.to_string()))?
            .into_bytes();

        Ok(GetResponse {
            path: key.to_string(),
            data,
            content_type,
        })
    }

    async fn delete(&self, key: &str) -> Result<(), S3ClientError> {
        self.client
            .delete_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| S3ClientError::Request(e.to_string()))?;

        Ok(())
    }

    fn object_url(&self, key: &str) -> Result<String, S3ClientError> {
        let url = match &self.config.endpoint {
            // Path-style against custom endpoints
            Some(endpoint) => format!(
                "{}/{}/{}",
                endpoint.trim_end_matches('/'),
                self.config.bucket,
                key
            ),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.config.bucket, self.config.region, key
            ),
        };

        Url::parse(&url).map_err(|e| S3ClientError::Config(format!("invalid object URL: {e}")))?;
        Ok(url)
    }
}
