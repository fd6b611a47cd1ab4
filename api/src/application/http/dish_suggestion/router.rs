use super::handlers::suggest_dish::{__path_suggest_dish, suggest_dish};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(suggest_dish))]
pub struct DishSuggestionApiDoc;

pub fn dish_suggestion_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/suggest-dish", state.args.server.root_path),
        post(suggest_dish),
    )
}
