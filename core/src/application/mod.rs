use crate::{
    domain::common::{WoltieConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        image::http_fetcher::HttpImageFetcher, llm::gemini_client::GeminiLLMClient,
        object_storage::s3::S3ObjectStorage, vision::google_vision::GoogleVisionAnnotator,
    },
};

pub type WoltieService =
    Service<GeminiLLMClient, HttpImageFetcher, GoogleVisionAnnotator, S3ObjectStorage>;

/// Builds the provider clients once; unconfigured providers only fail when used.
pub async fn create_service(config: WoltieConfig) -> Result<WoltieService, CoreError> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    let image_fetcher = HttpImageFetcher::new()?;
    let image_annotator = GoogleVisionAnnotator::new(&config.vision)?;
    let object_storage = S3ObjectStorage::new(&config.demo.object_storage);

    Ok(Service::new(
        llm_client,
        image_fetcher,
        image_annotator,
        object_storage,
        config.demo,
    ))
}
