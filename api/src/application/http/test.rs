use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};

use crate::{
    application::http::server::http_server::{router, state},
    args::{Args, DemoArgs, LlmArgs, LogArgs, ServerArgs, VisionArgs},
};

/// Arguments with every provider left unconfigured.
pub fn test_args() -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            allowed_origins: vec!["http://localhost:5173".to_string()],
            root_path: String::new(),
            metrics: false,
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
        llm: LlmArgs {
            gemini_api_key: None,
            gemini_model: "gemini-1.5-flash".to_string(),
            completion_timeout_secs: 5,
        },
        vision: VisionArgs {
            credentials_path: None,
            vision_timeout_secs: 5,
        },
        demo: DemoArgs {
            demo_image_url: None,
            demo_storage_endpoint: "https://storage.googleapis.com".to_string(),
            demo_storage_region: "auto".to_string(),
            demo_storage_bucket: "woltie-demo".to_string(),
            demo_storage_object: "dishes/demo-dish.jpg".to_string(),
            demo_storage_access_key: None,
            demo_storage_secret_key: None,
        },
    }
}

async fn server(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

#[tokio::test]
async fn test_root_reports_running() {
    let server = server(test_args()).await;

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "Woltie API", "status": "running"}));
}

#[tokio::test]
async fn test_root_path_prefixes_routes() {
    let mut args = test_args();
    args.server.root_path = "/woltie".to_string();
    let server = server(args).await;

    server.get("/woltie").await.assert_status_ok();
    server
        .post("/woltie/api/suggest-dish")
        .json(&json!({"description": ""}))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_suggest_dish_rejects_blank_description() {
    let server = server(test_args()).await;

    for body in [json!({"description": "   "}), json!({}), json!({"location": "Helsinki"})] {
        let response = server.post("/api/suggest-dish").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"detail": "Description is required"}));
    }
}

#[tokio::test]
async fn test_suggest_dish_rejects_malformed_body() {
    let server = server(test_args()).await;

    let response = server
        .post("/api/suggest-dish")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["detail"].is_string());
}

#[tokio::test]
async fn test_suggest_dish_without_api_key_is_server_error() {
    let server = server(test_args()).await;

    let response = server
        .post("/api/suggest-dish")
        .json(&json!({"description": "spicy noodle soup with beef", "location": "Helsinki"}))
        .await;

    response.assert_status_internal_server_error();
    let detail = response.json::<Value>()["detail"].as_str().unwrap().to_string();
    assert!(detail.starts_with("Error processing request: "));
    assert!(detail.contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn test_analyze_dish_validation() {
    let server = server(test_args()).await;

    let cases = [
        (
            json!({"title": "Pad Thai", "description": "Noodles"}),
            "Either image_url or image_base64 is required",
        ),
        (
            json!({"title": "Pad Thai", "description": "Noodles", "image_url": "https://a.example/x.jpg", "image_base64": "aGVsbG8="}),
            "Provide either image_url or image_base64, not both",
        ),
        (
            json!({"title": " ", "description": "Noodles", "image_url": "https://a.example/x.jpg"}),
            "Title is required",
        ),
        (
            json!({"title": "Pad Thai", "image_url": "https://a.example/x.jpg"}),
            "Description is required",
        ),
    ];

    for (body, detail) in cases {
        let response = server.post("/api/analyze-dish").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "detail": detail }));
    }
}

#[tokio::test]
async fn test_analyze_dish_with_undecodable_image_is_server_error() {
    let server = server(test_args()).await;

    let response = server
        .post("/api/analyze-dish")
        .json(&json!({"title": "Pad Thai", "description": "Noodles", "image_base64": "aGVsbG8="}))
        .await;

    response.assert_status_internal_server_error();
    let detail = response.json::<Value>()["detail"].as_str().unwrap().to_string();
    assert!(detail.starts_with("Error processing request: Failed to decode image"));
}

#[tokio::test]
async fn test_demo_without_image_source_explains_setup() {
    let server = server(test_args()).await;

    let response = server.get("/api/analyze-dish").await;

    response.assert_status_internal_server_error();
    let detail = response.json::<Value>()["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("DEMO_IMAGE_URL"));
    assert!(detail.contains("DEMO_STORAGE_ACCESS_KEY"));
}

#[tokio::test]
async fn test_openapi_lists_routes() {
    let server = server(test_args()).await;

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let spec = response.json::<Value>();
    assert!(spec["paths"]["/api/suggest-dish"]["post"].is_object());
    assert!(spec["paths"]["/api/analyze-dish"]["get"].is_object());
    assert!(spec["paths"]["/api/analyze-dish"]["post"].is_object());
}

#[tokio::test]
async fn test_metrics_are_opt_in() {
    let server = server(test_args()).await;

    server.get("/metrics").expect_failure().await.assert_status_not_found();
}
