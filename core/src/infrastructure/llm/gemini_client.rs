use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    completion::ports::LLMClient,
    image::entities::ImagePayload,
};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiResponse {
    /// Joins the text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build Gemini HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        let api_key = config
            .gemini_api_key
            .clone()
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set, completion requests will fail");
        }

        Ok(Self {
            api_key,
            model_name: config.gemini_model.clone(),
            base_url: GEMINI_BASE_URL.to_string(),
            client,
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn request(parts: Vec<Part>, response_schema: serde_json::Value) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content { parts }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        }
    }

    #[instrument(skip(self, request), fields(model = %self.model_name))]
    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CoreError::ProviderUnavailable(
                "Gemini model not initialized. Please set GEMINI_API_KEY.".to_string(),
            )
        })?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .into_text()
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_images(
        &self,
        prompt: String,
        images: Vec<ImagePayload>,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let mut parts = vec![Part::Text { text: prompt }];
        parts.extend(images.into_iter().map(|image| Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.to_string(),
                data: general_purpose::STANDARD.encode(&image.data),
            },
        }));

        self.call_gemini_api(Self::request(parts, response_schema))
            .await
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.call_gemini_api(Self::request(
            vec![Part::Text { text: prompt }],
            response_schema,
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    fn config(api_key: Option<&str>) -> LLMConfig {
        LLMConfig {
            gemini_api_key: api_key.map(str::to_string),
            gemini_model: "gemini-1.5-flash".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Serves a single canned HTTP response and returns the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buffer = vec![0u8; 64 * 1024];
            let _ = socket.read(&mut buffer).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_response_text_parts_are_joined() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "{\"dish_name\":"}, {"text": " \"Pho\"}"}]}}]
        }))
        .unwrap();

        assert_eq!(
            response.into_text().as_deref(),
            Some("{\"dish_name\": \"Pho\"}")
        );
    }

    #[test]
    fn test_empty_candidates_have_no_text() {
        let response: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_text(), None);

        let response: GeminiResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(response.into_text(), None);
    }

    #[test]
    fn test_image_parts_serialize_as_inline_data() {
        let request = GeminiLLMClient::request(
            vec![
                Part::Text {
                    text: "describe".to_string(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: "image/png".to_string(),
                        data: "AAAA".to_string(),
                    },
                },
            ],
            json!({"type": "object"}),
        );

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "describe");
        assert_eq!(
            value["contents"][0]["parts"][1]["inline_data"]["mime_type"],
            "image/png"
        );
        assert_eq!(
            value["generation_config"]["response_mime_type"],
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_is_reported_on_use() {
        let client = GeminiLLMClient::new(&config(None)).unwrap();

        let err = client
            .generate_with_text("prompt".to_string(), json!({}))
            .await
            .unwrap_err();

        assert!(err.is_unconfigured());
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_successful_reply_returns_text() {
        let base_url = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"dish_name\":\"Pho\"}"}]}}]}"#,
        )
        .await;
        let client = GeminiLLMClient::new(&config(Some("test-key")))
            .unwrap()
            .with_base_url(&base_url);

        let text = client
            .generate_with_text("prompt".to_string(), json!({}))
            .await
            .unwrap();

        assert_eq!(text, r#"{"dish_name":"Pho"}"#);
    }

    #[tokio::test]
    async fn test_provider_error_status_is_external_failure() {
        let base_url = serve_once("503 Service Unavailable", r#"{"error":"overloaded"}"#).await;
        let client = GeminiLLMClient::new(&config(Some("test-key")))
            .unwrap()
            .with_base_url(&base_url);

        let err = client
            .generate_with_text("prompt".to_string(), json!({}))
            .await
            .unwrap_err();

        match err {
            CoreError::ExternalServiceError(message) => assert!(message.contains("503")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
