use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    summary = "Service status",
    responses(
        (status = 200, body = RootResponse)
    )
)]
pub async fn root() -> Response<RootResponse> {
    Response::OK(RootResponse {
        message: "Woltie API".to_string(),
        status: "running".to_string(),
    })
}

pub fn root_routes(root_path: &str) -> Router<AppState> {
    let path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.to_string()
    };

    Router::new().route(&path, get(root))
}
