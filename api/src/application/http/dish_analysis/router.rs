use super::handlers::{
    analyze_dish::{__path_analyze_dish, analyze_dish},
    analyze_dish_demo::{__path_analyze_dish_demo, analyze_dish_demo},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_dish, analyze_dish_demo))]
pub struct DishAnalysisApiDoc;

pub fn dish_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/analyze-dish", state.args.server.root_path),
        get(analyze_dish_demo).post(analyze_dish),
    )
}
