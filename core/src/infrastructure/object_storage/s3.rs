use std::time::Duration;

use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    presigning::PresigningConfig,
};
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError, non_blank},
    storage::{entities::PresignedUrl, ports::ObjectStoragePort},
};

/// Presigns GET URLs against an S3-compatible endpoint (GCS XML interop by default).
///
/// Without an access key pair the signer is disabled and every request fails.
#[derive(Clone)]
pub struct S3ObjectStorage {
    client: Option<Client>,
}

impl S3ObjectStorage {
    pub fn new(config: &ObjectStorageConfig) -> Self {
        let (Some(access_key), Some(secret_key)) = (
            non_blank(config.access_key.clone()),
            non_blank(config.secret_key.clone()),
        ) else {
            tracing::info!("Demo storage keys are not set, presigned demo URLs disabled");
            return Self { client: None };
        };

        let credentials = Credentials::new(access_key, secret_key, None, None, "woltie");

        let endpoint = config.endpoint.trim_end_matches('/');

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            "Initializing object storage client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .force_path_style(true)
            .build();

        Self {
            client: Some(Client::from_conf(s3_config)),
        }
    }
}

impl ObjectStoragePort for S3ObjectStorage {
    #[instrument(skip(self))]
    async fn presign_get_url(
        &self,
        bucket: &str,
        object_key: &str,
        expires_in: Duration,
    ) -> Result<PresignedUrl, CoreError> {
        let client = self.client.as_ref().ok_or_else(|| {
            CoreError::DemoImageUnavailable("object storage credentials are not configured".to_string())
        })?;

        tracing::debug!(
            bucket = %bucket,
            object_key = %object_key,
            expires_in_secs = expires_in.as_secs(),
            "Generating presigned GET URL"
        );

        let presigning_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| CoreError::DemoImageUnavailable(format!("Invalid expiration: {}", e)))?;

        let presigned_request = client
            .get_object()
            .bucket(bucket)
            .key(object_key)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    object_key = %object_key,
                    "Failed to generate presigned GET URL"
                );
                CoreError::DemoImageUnavailable(format!("Failed to generate presigned URL: {}", e))
            })?;

        Ok(PresignedUrl {
            url: presigned_request.uri().to_string(),
            expires_in_seconds: expires_in.as_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(access_key: Option<&str>, secret_key: Option<&str>) -> ObjectStorageConfig {
        ObjectStorageConfig {
            endpoint: "https://storage.googleapis.com/".to_string(),
            region: "auto".to_string(),
            access_key: access_key.map(str::to_string),
            secret_key: secret_key.map(str::to_string),
            bucket: "woltie-demo".to_string(),
            object_key: "dishes/demo-dish.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_keys_disable_signing() {
        for storage in [
            S3ObjectStorage::new(&config(None, None)),
            S3ObjectStorage::new(&config(Some("GOOG1EXAMPLE"), Some("  "))),
        ] {
            let err = storage
                .presign_get_url("woltie-demo", "dishes/demo-dish.jpg", Duration::from_secs(900))
                .await
                .unwrap_err();

            assert!(matches!(err, CoreError::DemoImageUnavailable(_)));
        }
    }

    #[tokio::test]
    async fn test_presigned_url_targets_object() {
        let storage = S3ObjectStorage::new(&config(Some("GOOG1EXAMPLE"), Some("secret")));

        let presigned = storage
            .presign_get_url("woltie-demo", "dishes/demo-dish.jpg", Duration::from_secs(900))
            .await
            .unwrap();

        assert!(presigned
            .url
            .starts_with("https://storage.googleapis.com/woltie-demo/dishes/demo-dish.jpg?"));
        assert!(presigned.url.contains("X-Amz-Expires=900"));
        assert_eq!(presigned.expires_in_seconds, 900);
    }
}
