use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::http::dish_suggestion::validators::validate_not_blank;

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Exactly one image source must be supplied; blank strings count as absent.
pub fn validate_image_source(request: &AnalyzeDishRequest) -> Result<(), ValidationError> {
    match (is_present(&request.image_url), is_present(&request.image_base64)) {
        (true, true) => Err(ValidationError::new("image_source")
            .with_message("Provide either image_url or image_base64, not both".into())),
        (false, false) => Err(ValidationError::new("image_source")
            .with_message("Either image_url or image_base64 is required".into())),
        _ => Ok(()),
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[validate(schema(function = "validate_image_source"))]
pub struct AnalyzeDishRequest {
    #[serde(default)]
    #[schema(example = "Pad Thai")]
    #[validate(custom(function = "validate_not_blank", message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "Description is required"))]
    pub description: String,
    pub image_url: Option<String>,
    /// Raw base64 or a `data:` URL.
    pub image_base64: Option<String>,
    pub user_preferences: Option<Vec<String>>,
    pub known_dishes: Option<Vec<String>>,
}
