use crate::domain::{
    common::{DemoConfig, ObjectStorageConfig, services::Service},
    completion::ports::MockLLMClient,
    image::{
        entities::ImagePayload,
        ports::{MockImageAnnotator, MockImageFetcher},
    },
    storage::ports::MockObjectStoragePort,
};

pub type MockService =
    Service<MockLLMClient, MockImageFetcher, MockImageAnnotator, MockObjectStoragePort>;

pub fn demo_config(image_url: Option<&str>) -> DemoConfig {
    DemoConfig {
        image_url: image_url.map(str::to_string),
        object_storage: ObjectStorageConfig {
            endpoint: "https://storage.googleapis.com".to_string(),
            region: "auto".to_string(),
            access_key: None,
            secret_key: None,
            bucket: "woltie-demo".to_string(),
            object_key: "dishes/demo-dish.jpg".to_string(),
        },
    }
}

pub fn png_payload() -> ImagePayload {
    ImagePayload::from_bytes(bytes::Bytes::from(
        crate::domain::image::entities::encode_test_image(image::ImageFormat::Png),
    ))
    .unwrap()
}

/// Service whose image and storage mocks carry no expectations, so any call fails the test.
pub fn text_only_service(llm: MockLLMClient) -> MockService {
    Service::new(
        llm,
        MockImageFetcher::new(),
        MockImageAnnotator::new(),
        MockObjectStoragePort::new(),
        demo_config(None),
    )
}
