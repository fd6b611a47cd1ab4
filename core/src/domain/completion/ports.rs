use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, image::entities::ImagePayload};

/// Client for the generative model that turns a prompt into free text.
///
/// The schema is a structured-output hint; callers still normalize the
/// returned text themselves.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_images(
        &self,
        prompt: String,
        images: Vec<ImagePayload>,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
