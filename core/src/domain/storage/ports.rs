use std::future::Future;
use std::time::Duration;

use crate::domain::common::entities::app_errors::CoreError;

use super::entities::PresignedUrl;

/// Port for object storage operations (S3-compatible endpoints)
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    /// Generate a presigned GET URL for downloads
    fn presign_get_url(
        &self,
        bucket: &str,
        object_key: &str,
        expires_in: Duration,
    ) -> impl Future<Output = Result<PresignedUrl, CoreError>> + Send;
}
