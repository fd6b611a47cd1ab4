use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    domain::{
        common::{VisionConfig, entities::app_errors::CoreError},
        image::{entities::ImagePayload, ports::ImageAnnotator},
    },
    infrastructure::vision::service_account::{CLOUD_VISION_SCOPE, ServiceAccountKey},
};

const VISION_ANNOTATE_URL: &str = "https://vision.googleapis.com/v1/images:annotate";
const MAX_LABELS: usize = 10;

#[derive(Debug, Clone)]
pub struct GoogleVisionAnnotator {
    credentials: Option<ServiceAccountKey>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
struct AnnotateImageRequest {
    image: VisionImage,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct VisionImage {
    content: String,
}

#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "maxResults")]
    max_results: usize,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<ImageAnnotations>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageAnnotations {
    #[serde(default, rename = "labelAnnotations")]
    label_annotations: Vec<EntityAnnotation>,
    #[serde(default, rename = "textAnnotations")]
    text_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    error: Option<VisionError>,
}

#[derive(Debug, Deserialize)]
struct EntityAnnotation {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct VisionError {
    #[serde(default)]
    message: String,
}

/// Renders labels and detected text as one line of prompt context.
pub(crate) fn summarize_annotations(response: AnnotateResponse) -> Result<String, CoreError> {
    let Some(annotations) = response.responses.into_iter().next() else {
        return Ok(String::new());
    };

    if let Some(error) = annotations.error {
        return Err(CoreError::ExternalServiceError(format!(
            "Vision API error: {}",
            error.message
        )));
    }

    let labels: Vec<&str> = annotations
        .label_annotations
        .iter()
        .map(|a| a.description.trim())
        .filter(|d| !d.is_empty())
        .collect();

    // The first text annotation holds the full detected text block.
    let text = annotations
        .text_annotations
        .first()
        .map(|a| a.description.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    let mut sections = Vec::new();
    if !labels.is_empty() {
        sections.push(format!("Labels: {}", labels.join(", ")));
    }
    if !text.is_empty() {
        sections.push(format!("Visible text: {}", text));
    }

    Ok(sections.join(". "))
}

impl GoogleVisionAnnotator {
    /// Loads the service-account file; the annotator stays disabled when it cannot.
    pub fn new(config: &VisionConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build Vision HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        let credentials = match &config.credentials_path {
            Some(path) => match ServiceAccountKey::from_file(path) {
                Ok(key) => {
                    tracing::info!(client_email = %key.client_email, "Vision annotator enabled");
                    Some(key)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load credentials, image annotation disabled");
                    None
                }
            },
            None => {
                tracing::warn!("GOOGLE_APPLICATION_CREDENTIALS is not set, image annotation disabled");
                None
            }
        };

        Ok(Self {
            credentials,
            client,
        })
    }
}

impl ImageAnnotator for GoogleVisionAnnotator {
    #[instrument(skip(self, image), fields(mime_type = image.mime_type))]
    async fn annotate(&self, image: &ImagePayload) -> Result<String, CoreError> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            CoreError::ProviderUnavailable("Vision API credentials are not configured".to_string())
        })?;

        let access_token = credentials
            .fetch_access_token(&self.client, CLOUD_VISION_SCOPE)
            .await?;

        let request = AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: VisionImage {
                    content: general_purpose::STANDARD.encode(&image.data),
                },
                features: vec![
                    Feature {
                        kind: "LABEL_DETECTION",
                        max_results: MAX_LABELS,
                    },
                    Feature {
                        kind: "TEXT_DETECTION",
                        max_results: 1,
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(VISION_ANNOTATE_URL)
            .bearer_auth(access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("Vision API error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoreError::ExternalServiceError(format!(
                "Vision API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: AnnotateResponse = response.json().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("Failed to parse Vision response: {}", e))
        })?;

        summarize_annotations(body)
    }
}
