use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;

use crate::domain::{common::entities::app_errors::CoreError, image::entities::ImagePayload};

/// Decodes inline base64 image data. A `data:<mime>;base64,` prefix and
/// embedded whitespace are tolerated.
pub fn decode_base64_image(encoded: &str) -> Result<ImagePayload, CoreError> {
    let encoded = encoded.trim();
    let encoded = match encoded.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map(|(_, data)| data).unwrap_or(rest),
        None => encoded,
    };

    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

    let data = general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| CoreError::ImageDecode(format!("invalid base64 image data: {}", e)))?;

    ImagePayload::from_bytes(Bytes::from(data))
}
