use crate::domain::common::{entities::app_errors::CoreError, non_blank};

/// Where the image of a dish analysis comes from. Exactly one source is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    Base64(String),
}

impl ImageSource {
    /// Blank values count as absent.
    pub fn from_fields(
        image_url: Option<String>,
        image_base64: Option<String>,
    ) -> Result<Self, CoreError> {
        match (non_blank(image_url), non_blank(image_base64)) {
            (Some(url), None) => Ok(ImageSource::Url(url.trim().to_string())),
            (None, Some(data)) => Ok(ImageSource::Base64(data)),
            (Some(_), Some(_)) => Err(CoreError::Validation(
                "Provide either image_url or image_base64, not both".to_string(),
            )),
            (None, None) => Err(CoreError::Validation(
                "Either image_url or image_base64 is required".to_string(),
            )),
        }
    }
}
