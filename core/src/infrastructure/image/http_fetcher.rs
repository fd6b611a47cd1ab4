use std::time::Duration;

use bytes::{Bytes, BytesMut};
use reqwest::Client;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::{entities::ImagePayload, ports::ImageFetcher},
};

pub const IMAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
    max_bytes: usize,
}

impl HttpImageFetcher {
    pub fn new() -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(IMAGE_FETCH_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build image HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            client,
            max_bytes: MAX_IMAGE_BYTES,
        })
    }

    async fn download(&self, url: &str) -> Result<Bytes, CoreError> {
        let fetch_error = |reason: String| CoreError::ImageFetch {
            url: url.to_string(),
            reason,
        };

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP status {}", status)));
        }

        if response
            .content_length()
            .is_some_and(|length| length > self.max_bytes as u64)
        {
            return Err(fetch_error(format!(
                "image is larger than {} bytes",
                self.max_bytes
            )));
        }

        let mut buffer = BytesMut::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| fetch_error(e.to_string()))?
        {
            if buffer.len() + chunk.len() > self.max_bytes {
                return Err(fetch_error(format!(
                    "image is larger than {} bytes",
                    self.max_bytes
                )));
            }
            buffer.extend_from_slice(&chunk);
        }

        Ok(buffer.freeze())
    }
}

impl ImageFetcher for HttpImageFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<ImagePayload, CoreError> {
        let data = self.download(url).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Image download failed");
        })?;

        let image = ImagePayload::from_bytes(data).map_err(|e| match e {
            CoreError::ImageDecode(reason) => CoreError::ImageFetch {
                url: url.to_string(),
                reason,
            },
            other => other,
        })?;

        tracing::debug!(
            mime_type = image.mime_type,
            width = image.width,
            height = image.height,
            "Image fetched"
        );

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use image::ImageFormat;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;
    use crate::domain::image::entities::encode_test_image;

    async fn serve_once(status_line: &'static str, content_type: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buffer = vec![0u8; 8 * 1024];
            let _ = socket.read(&mut buffer).await;
            let head = format!(
                "HTTP/1.1 {}\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                status_line,
                content_type,
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/dish.jpg", addr)
    }

    #[tokio::test]
    async fn test_not_found_names_status_and_url() {
        let url = serve_once("404 Not Found", "text/plain", b"missing".to_vec()).await;
        let fetcher = HttpImageFetcher::new().unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();
        let message = err.to_string();

        assert!(matches!(err, CoreError::ImageFetch { .. }));
        assert!(message.contains("404"));
        assert!(message.contains(&url));
    }

    #[tokio::test]
    async fn test_non_image_body_names_url_and_cause() {
        let url = serve_once("200 OK", "text/html", b"<html>not an image</html>".to_vec()).await;
        let fetcher = HttpImageFetcher::new().unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();
        let message = err.to_string();

        assert!(matches!(err, CoreError::ImageFetch { .. }));
        assert!(message.contains(&url));
        assert!(message.contains("unrecognized image format"));
    }

    #[tokio::test]
    async fn test_valid_image_is_returned() {
        let url = serve_once("200 OK", "image/png", encode_test_image(ImageFormat::Png)).await;
        let fetcher = HttpImageFetcher::new().unwrap();

        let image = fetcher.fetch(&url).await.unwrap();

        assert_eq!(image.mime_type, "image/png");
        assert_eq!((image.width, image.height), (3, 2));
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let url = serve_once("200 OK", "image/png", encode_test_image(ImageFormat::Png)).await;
        let fetcher = HttpImageFetcher {
            max_bytes: 8,
            ..HttpImageFetcher::new().unwrap()
        };

        let err = fetcher.fetch(&url).await.unwrap_err();

        assert!(err.to_string().contains("larger than 8 bytes"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/dish.jpg", listener.local_addr().unwrap());
        drop(listener);
        let fetcher = HttpImageFetcher::new().unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();

        assert!(matches!(err, CoreError::ImageFetch { .. }));
    }
}
