use std::{fmt, io::Cursor};

use bytes::Bytes;
use image::ImageFormat;

use crate::domain::common::entities::app_errors::CoreError;

/// An image that is known to decode and carries a MIME type the completion
/// provider accepts.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: &'static str,
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
}

impl ImagePayload {
    /// Validates raw bytes as an image.
    ///
    /// JPEG, PNG and WebP are kept as-is; any other format the decoder
    /// understands is re-encoded to PNG.
    pub fn from_bytes(data: Bytes) -> Result<Self, CoreError> {
        let format = image::guess_format(&data)
            .map_err(|e| CoreError::ImageDecode(format!("unrecognized image format: {}", e)))?;

        let decoded = image::load_from_memory_with_format(&data, format).map_err(|e| {
            CoreError::ImageDecode(format!("invalid {:?} image data: {}", format, e))
        })?;

        let (width, height) = (decoded.width(), decoded.height());

        let (mime_type, data) = match format {
            ImageFormat::Jpeg => ("image/jpeg", data),
            ImageFormat::Png => ("image/png", data),
            ImageFormat::WebP => ("image/webp", data),
            other => {
                tracing::debug!(format = ?other, "Re-encoding image to PNG");

                let mut buffer = Vec::new();
                decoded
                    .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
                    .map_err(|e| {
                        CoreError::ImageDecode(format!(
                            "unsupported {:?} image could not be converted: {}",
                            other, e
                        ))
                    })?;

                ("image/png", Bytes::from(buffer))
            }
        };

        Ok(Self {
            mime_type,
            data,
            width,
            height,
        })
    }
}

impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.data.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn encode_test_image(format: ImageFormat) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(3, 2, image::Rgb([200, 80, 40]));
    let mut buffer = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buffer), format)
        .unwrap();
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_is_kept_as_is() {
        let png = encode_test_image(ImageFormat::Png);
        let payload = ImagePayload::from_bytes(Bytes::from(png.clone())).unwrap();

        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, Bytes::from(png));
        assert_eq!((payload.width, payload.height), (3, 2));
    }

    #[test]
    fn test_jpeg_is_detected() {
        let jpeg = encode_test_image(ImageFormat::Jpeg);
        let payload = ImagePayload::from_bytes(Bytes::from(jpeg)).unwrap();
        assert_eq!(payload.mime_type, "image/jpeg");
    }

    #[test]
    fn test_bmp_is_converted_to_png() {
        let bmp = encode_test_image(ImageFormat::Bmp);
        let payload = ImagePayload::from_bytes(Bytes::from(bmp)).unwrap();

        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(
            image::guess_format(&payload.data).unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_text_is_not_an_image() {
        let err = ImagePayload::from_bytes(Bytes::from_static(b"<html>not found</html>"))
            .unwrap_err();
        assert!(matches!(err, CoreError::ImageDecode(msg) if msg.contains("unrecognized")));
    }

    #[test]
    fn test_truncated_png_fails_to_decode() {
        let mut png = encode_test_image(ImageFormat::Png);
        png.truncate(20);

        let err = ImagePayload::from_bytes(Bytes::from(png)).unwrap_err();
        assert!(matches!(err, CoreError::ImageDecode(msg) if msg.contains("Png")));
    }
}
