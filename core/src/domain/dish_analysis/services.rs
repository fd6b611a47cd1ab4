use std::time::Duration;

use tracing::instrument;

use crate::domain::{
    common::{
        ObjectStorageConfig, ensure_not_blank, entities::app_errors::CoreError, non_blank,
        services::Service,
    },
    completion::ports::LLMClient,
    dish_analysis::{
        entities::DishAnalysis, helpers::analysis_from_reply, ports::DishAnalysisService,
        prompts::build_dish_analysis_prompt, schema::get_dish_analysis_schema,
        value_objects::AnalyzeDishInput,
    },
    image::{
        entities::ImagePayload,
        helpers::decode_base64_image,
        ports::{ImageAnnotator, ImageFetcher},
        value_objects::ImageSource,
    },
    storage::ports::ObjectStoragePort,
};

pub const DEMO_TITLE: &str = "Pad Thai with Shrimp";
pub const DEMO_DESCRIPTION: &str = "Stir-fried rice noodles with shrimp, tofu, egg, bean sprouts and crushed peanuts, served with a wedge of lime.";
const DEMO_URL_TTL: Duration = Duration::from_secs(15 * 60);

fn demo_image_guidance(storage: &ObjectStorageConfig, cause: &CoreError) -> String {
    format!(
        "No demo image is available ({}). Set DEMO_IMAGE_URL to a publicly reachable image, \
         or set DEMO_STORAGE_ACCESS_KEY and DEMO_STORAGE_SECRET_KEY so that a signed URL \
         can be generated for {}/{} on {}.",
        cause, storage.bucket, storage.object_key, storage.endpoint
    )
}

impl<LLM, IF, IA, OS> Service<LLM, IF, IA, OS>
where
    LLM: LLMClient,
    IF: ImageFetcher,
    IA: ImageAnnotator,
    OS: ObjectStoragePort,
{
    async fn load_image(&self, source: &ImageSource) -> Result<ImagePayload, CoreError> {
        match source {
            ImageSource::Url(url) => self.image_fetcher.fetch(url).await,
            ImageSource::Base64(data) => decode_base64_image(data),
        }
    }

    async fn annotate_image(&self, image: &ImagePayload) -> String {
        match self.image_annotator.annotate(image).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(error = %e, "Image annotation unavailable, continuing without it");
                String::new()
            }
        }
    }
}

impl<LLM, IF, IA, OS> DishAnalysisService for Service<LLM, IF, IA, OS>
where
    LLM: LLMClient,
    IF: ImageFetcher,
    IA: ImageAnnotator,
    OS: ObjectStoragePort,
{
    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn analyze_dish(&self, mut input: AnalyzeDishInput) -> Result<DishAnalysis, CoreError> {
        ensure_not_blank(&input.title, "Title is required")?;
        ensure_not_blank(&input.description, "Description is required")?;
        let source = ImageSource::from_fields(input.image_url.take(), input.image_base64.take())?;

        let image = self.load_image(&source).await?;
        tracing::debug!(image = ?image, "Image loaded");

        let annotations = self.annotate_image(&image).await;
        let prompt = build_dish_analysis_prompt(&input, &annotations);

        let raw_response = self
            .llm_client
            .generate_with_images(prompt, vec![image], get_dish_analysis_schema())
            .await?;

        let analysis = analysis_from_reply(&raw_response, &input.title, &input.description);

        tracing::info!(dish_name = %analysis.dish_name, "Dish analysis completed");

        Ok(analysis)
    }

    #[instrument(skip(self))]
    async fn analyze_demo_dish(&self) -> Result<DishAnalysis, CoreError> {
        let image_url = self.resolve_demo_image_url().await?;

        self.analyze_dish(AnalyzeDishInput {
            title: DEMO_TITLE.to_string(),
            description: DEMO_DESCRIPTION.to_string(),
            image_url: Some(image_url),
            ..Default::default()
        })
        .await
    }

    async fn resolve_demo_image_url(&self) -> Result<String, CoreError> {
        if let Some(url) = non_blank(self.demo.image_url.clone()) {
            return Ok(url);
        }

        let storage = &self.demo.object_storage;
        let presigned = self
            .object_storage
            .presign_get_url(&storage.bucket, &storage.object_key, DEMO_URL_TTL)
            .await
            .map_err(|e| CoreError::DemoImageUnavailable(demo_image_guidance(storage, &e)))?;

        Ok(presigned.url)
    }
}
