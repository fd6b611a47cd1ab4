use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, image::entities::ImagePayload};

/// Downloads an image and guarantees it decodes.
#[cfg_attr(test, mockall::automock)]
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<ImagePayload, CoreError>> + Send;
}

/// Produces a short text summary (labels, visible text) of an image.
///
/// Used only as extra prompt context, so callers treat errors as an empty summary.
#[cfg_attr(test, mockall::automock)]
pub trait ImageAnnotator: Send + Sync {
    fn annotate(
        &self,
        image: &ImagePayload,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
