//! Tests for the S3 client collaborators

use super::*;
use bytes::Bytes;
use filestash_core::StorageError;

fn upload(destination: &str, data: &'static str) -> UploadRequest {
    UploadRequest {
        data: Bytes::from(data),
        destination: destination.to_string(),
        content_type: "text/plain".to_string(),
    }
}

// =============================================================================
// MEMORY CLIENT
// =============================================================================

mod memory_client_tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get() {
        let client = MemoryClient::new();

        let put = client.put(upload("markdown/test.md", "# Storage")).await.unwrap();
        assert_eq!(put.path, "markdown/test.md");

        let got = client.get("markdown/test.md").await.unwrap();
        assert_eq!(got.path, "markdown/test.md");
        assert_eq!(&got.data[..], b"# Storage");
        assert_eq!(got.content_type, Some("text/plain".to_string()));
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let client = MemoryClient::new();

        client.put(upload("key", "original")).await.unwrap();
        client.put(upload("key", "updated")).await.unwrap();

        let got = client.get("key").await.unwrap();
        assert_eq!(&got.data[..], b"updated");
        assert_eq!(client.len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_key_not_found() {
        let client = MemoryClient::new();

        let err = client.get("absent").await.unwrap_err();
        assert_eq!(err, S3ClientError::NotFound("absent".to_string()));
    }

    #[tokio::test]
    async fn test_delete_removes_object() {
        let client = MemoryClient::new();
        client.put(upload("key", "data")).await.unwrap();

        client.delete("key").await.unwrap();

        assert!(!client.contains("key"));
        assert!(client.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_key_succeeds() {
        let client = MemoryClient::new();
        client.delete("never-stored").await.unwrap();
    }

    #[tokio::test]
    async fn test_etag_is_quoted_md5() {
        let client = MemoryClient::new();
        client.put(upload("key", "test content")).await.unwrap();

        let etag = client.etag("key").unwrap();
        assert!(etag.starts_with('"') && etag.ends_with('"'));

        // Same content, same etag
        client.put(upload("other", "test content")).await.unwrap();
        assert_eq!(client.etag("other").unwrap(), etag);
    }

    #[tokio::test]
    async fn test_injected_put_failure() {
        let client = MemoryClient::new();
        client.fail_puts(true);

        let err = client.put(upload("key", "data")).await.unwrap_err();
        assert!(matches!(err, S3ClientError::Request(_)));
        assert!(client.is_empty());

        client.fail_puts(false);
        client.put(upload("key", "data")).await.unwrap();
    }

    #[tokio::test]
    async fn test_injected_delete_failure() {
        let client = MemoryClient::new();
        client.put(upload("key", "data")).await.unwrap();
        client.fail_deletes(true);

        let err = client.delete("key").await.unwrap_err();
        assert!(matches!(err, S3ClientError::Request(_)));
        assert!(client.contains("key"));
    }

    #[tokio::test]
    async fn test_object_url() {
        let client = MemoryClient::new().with_bucket("assets");

        let url = client.object_url("images/logo.png").unwrap();
        assert_eq!(
            url,
            "https://assets.s3.us-east-1.amazonaws.com/images/logo.png"
        );
    }
}

// =============================================================================
// SDK CLIENT CONFIGURATION
// =============================================================================

mod sdk_client_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_bucket_is_config_error() {
        let result = SdkClient::new(S3Config::new("")).await;
        assert!(matches!(result, Err(S3ClientError::Config(_))));
    }

    #[tokio::test]
    async fn test_from_env_without_bucket_is_config_error() {
        std::env::remove_var("S3_BUCKET");

        let result = SdkClient::from_env().await;
        assert!(matches!(result, Err(S3ClientError::Config(_))));
    }

    #[tokio::test]
    async fn test_object_url_virtual_hosted() {
        let client = SdkClient::new(S3Config::new("demo-bucket").with_region("eu-west-2"))
            .await
            .unwrap();

        let url = client.object_url("markdown/test.md").unwrap();
        assert_eq!(
            url,
            "https://demo-bucket.s3.eu-west-2.amazonaws.com/markdown/test.md"
        );
    }

    #[tokio::test]
    async fn test_object_url_path_style_with_endpoint() {
        let client = SdkClient::new(
            S3Config::new("demo-bucket").with_endpoint("http://localhost:9000/"),
        )
        .await
        .unwrap();

        let url = client.object_url("markdown/test.md").unwrap();
        assert_eq!(url, "http://localhost:9000/demo-bucket/markdown/test.md");
    }

    #[test]
    fn test_config_builders() {
        let config = S3Config::new("bucket")
            .with_region("ap-southeast-2")
            .with_endpoint("http://localhost:9000");

        assert_eq!(config.bucket, "bucket");
        assert_eq!(config.region, "ap-southeast-2");
        assert_eq!(config.endpoint, Some("http://localhost:9000".to_string()));
    }
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_storage_not_found() {
        let err: StorageError = S3ClientError::NotFound("a/b.txt".to_string()).into();
        assert_eq!(err, StorageError::NotFound("a/b.txt".to_string()));
    }

    #[test]
    fn test_config_maps_to_storage_config() {
        let err: StorageError = S3ClientError::Config("no bucket".to_string()).into();
        assert_eq!(err, StorageError::Config("no bucket".to_string()));
    }

    #[test]
    fn test_request_maps_to_storage_backend() {
        let err: StorageError = S3ClientError::Request("timeout".to_string()).into();
        assert_eq!(err, StorageError::Backend("timeout".to_string()));
    }
}
